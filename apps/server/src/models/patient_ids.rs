//! Foreign identifiers assigned to a patient by other facilities or practices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{FieldDef, Record, RecordType, Registry, SqlType, BASE_MODULE_KEY};

pub const TABLE_PATIENT_ID: &str = "patient_ids";
pub const MODULE_PATIENT_ID: &str = BASE_MODULE_KEY;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientIdRecord {
    #[serde(rename = "patient_id")]
    pub patient: i64,
    #[serde(rename = "foreign_identifier")]
    pub foreign_id: String,
    #[serde(rename = "facility_id")]
    pub facility: i64,
    #[serde(rename = "practice_id")]
    pub practice: i64,
    #[serde(rename = "user_id")]
    pub user: i64,
    pub stamp: DateTime<Utc>,
    pub active: String,
    pub id: i64,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("patient", "patient", SqlType::BigInt),
    FieldDef::new("foreign_id", "foreign_id", SqlType::Varchar(64)),
    FieldDef::new("facility", "facility", SqlType::BigInt),
    FieldDef::new("practice", "practice", SqlType::BigInt),
    FieldDef::new("user", "user", SqlType::BigInt),
    FieldDef::new("stamp", "stamp", SqlType::Timestamp),
    FieldDef::new("active", "active", SqlType::Varchar(8)),
    FieldDef::new("id", "id", SqlType::BigInt),
];

impl Record for PatientIdRecord {
    fn record_type() -> RecordType {
        RecordType {
            name: "PatientIdRecord",
            fields: FIELDS,
        }
    }
}

pub fn register(registry: &mut Registry) {
    registry.register_table::<PatientIdRecord>(TABLE_PATIENT_ID, Some("id"));
    registry.register_module::<PatientIdRecord>(MODULE_PATIENT_ID);
}
