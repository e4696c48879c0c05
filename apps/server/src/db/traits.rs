//! Storage trait for patient read projections

use crate::{
    db::search::PatientSearchQuery,
    models::{EmrAttachment, PatientInformation, PatientSearchResult},
    Result,
};
use async_trait::async_trait;

/// Read-side storage for patient records.
///
/// The service layer owns validation and predicate construction; a store only
/// executes the queries it is handed and maps rows.
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Run a prepared patient search.
    async fn search(&self, query: &PatientSearchQuery) -> Result<Vec<PatientSearchResult>>;

    /// Load the information panel for one patient.
    ///
    /// # Returns
    /// * `Ok(Some(info))` - Patient exists
    /// * `Ok(None)` - No patient with that id
    async fn information(&self, patient: i64) -> Result<Option<PatientInformation>>;

    /// List EMR attachments for a patient, optionally restricted to one module.
    ///
    /// Hidden modules are never listed.
    async fn attachments(&self, patient: i64, module: Option<&str>)
        -> Result<Vec<EmrAttachment>>;
}
