//! Fixed-shape read results returned by the patient endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One row of a patient search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSearchResult {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub patient_id: String,
    pub age: i64,
    pub date_of_birth: NaiveDate,
    pub id: i64,
}

/// Summary shown in the patient information panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInformation {
    pub patient_name: String,
    pub patient_id: String,
    pub date_of_birth: NaiveDate,
    pub language: Option<String>,
    pub date_of_birth_mdy: String,
    /// "N years", or "N months" under two years old.
    pub age: String,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal: Option<String>,
    pub csz: Option<String>,
    pub hasallergy: bool,
    pub pcp: Option<String>,
    pub facility: Option<String>,
    pub pharmacy: Option<String>,
}

/// A module record attached to a patient's EMR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmrAttachment {
    #[serde(rename = "patient_id")]
    pub patient: i64,
    pub module: String,
    #[serde(rename = "module_id")]
    pub oid: i64,
    pub annotation: Option<String>,
    pub summary: Option<String>,
    #[serde(rename = "timestamp")]
    pub stamp: DateTime<Utc>,
    pub date_mdy: String,
    pub module_name: String,
    pub module_namespace: String,
    pub locked: i32,
    #[serde(rename = "internal_id")]
    pub id: i64,
}
