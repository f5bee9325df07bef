//! Shared client-side state.
//!
//! The only state shared across views is the session (`auth`); everything
//! else is re-fetched per view, so each page reload sees the server's
//! current data.

pub mod auth;
