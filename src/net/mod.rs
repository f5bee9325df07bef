//! REST API access layer.
//!
//! DESIGN
//! ======
//! One HTTP wrapper (`client`) owns request construction, bearer-token
//! attachment, and error normalization (`error`). The per-resource service
//! modules (`auth`, `projects`, `tasks`, `team`) layer typed operations on
//! top of it, mirroring the backend's endpoint groups.

pub mod auth;
pub mod client;
pub mod error;
pub mod projects;
pub mod tasks;
pub mod team;
pub mod types;
