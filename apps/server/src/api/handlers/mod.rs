//! Request handlers for API endpoints
//!
//! Handlers extract request data, call the patient service and serialize the
//! result; errors render through [`crate::Error`]'s `IntoResponse`.

pub mod patient;

pub use patient::*;
