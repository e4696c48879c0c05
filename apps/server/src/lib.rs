//! FreeMED records service
//!
//! Data-access layer for patient records:
//! - Schema registry mapping record types to tables, with startup bootstrap
//! - EMR module registry for generic attachment listings
//! - Parameterized patient search built from untyped client criteria
//! - Thin HTTP surface over the read projections

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod schema;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
