//! Service layer - business logic between handlers and storage

pub mod patient;

pub use patient::{ModuleSummary, PatientService};
