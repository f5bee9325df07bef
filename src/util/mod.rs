//! Small helpers shared by form-driven views.

pub mod form;
