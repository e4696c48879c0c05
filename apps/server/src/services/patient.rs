//! Patient service - search and read projections
//!
//! Orchestrates patient operations by:
//! - Turning client criteria into a parameterized search predicate
//! - Resolving opaque record identifiers
//! - Restricting attachment listings to registered, user-visible modules

use crate::{
    db::{build_predicate, PatientSearchQuery, PatientStore, SearchCriteria},
    models::{EmrAttachment, PatientInformation, PatientSearchResult, TABLE_PATIENT},
    schema::Registry,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A user-visible EMR module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub module: String,
    pub record_type: String,
}

pub struct PatientService {
    store: Arc<dyn PatientStore>,
    registry: Arc<Registry>,
    result_limit: usize,
}

impl PatientService {
    pub fn new(store: Arc<dyn PatientStore>, registry: Arc<Registry>, result_limit: usize) -> Self {
        Self {
            store,
            registry,
            result_limit,
        }
    }

    /// Search patients matching `criteria`.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<PatientSearchResult>> {
        tracing::debug!(params = ?criteria.keys(), "Patient search requested");

        let predicate = build_predicate(criteria).inspect_err(|_| {
            tracing::info!(params = ?criteria.keys(), "No usable search parameters found");
        })?;
        let query = PatientSearchQuery::new(predicate).with_limit(self.result_limit);

        let results = self.store.search(&query).await?;
        tracing::debug!(count = results.len(), "Patient search completed");
        Ok(results)
    }

    pub async fn information(&self, id: &str) -> Result<PatientInformation> {
        let not_found = || Error::UnknownIdentifier {
            record_type: TABLE_PATIENT.to_string(),
            id: id.to_string(),
        };

        let patient = parse_record_id(id).ok_or_else(not_found)?;
        self.store.information(patient).await?.ok_or_else(not_found)
    }

    /// Attachments for a patient, optionally restricted to one module.
    ///
    /// Unknown or non-listable module keys and malformed ids yield an empty
    /// list without touching storage.
    pub async fn attachments(&self, id: &str, module: Option<&str>) -> Result<Vec<EmrAttachment>> {
        let Some(patient) = parse_record_id(id) else {
            return Ok(Vec::new());
        };

        if let Some(module) = module {
            if !self.registry.is_listed_module(module) {
                tracing::debug!(module = %module, "Attachment listing for unknown module");
                return Ok(Vec::new());
            }
        }

        self.store.attachments(patient, module).await
    }

    pub fn modules(&self) -> Vec<ModuleSummary> {
        self.registry
            .listed_modules()
            .map(|m| ModuleSummary {
                module: m.module_key.clone(),
                record_type: m.record_type.name.to_string(),
            })
            .collect()
    }
}

/// Record identifiers are opaque strings on the wire and integer keys in storage.
fn parse_record_id(id: &str) -> Option<i64> {
    id.parse::<i64>().ok()
}
