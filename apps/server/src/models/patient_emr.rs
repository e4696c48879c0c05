//! Per-patient EMR attachment index.
//!
//! Every module record attached to a patient has one row here pointing at the
//! module (`module`, matching `modules.module_table`) and the record id (`oid`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{FieldDef, Record, RecordType, Registry, SqlType};

pub const TABLE_PATIENT_EMR: &str = "patient_emr";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientEmrRecord {
    pub patient: i64,
    pub module: String,
    pub oid: i64,
    pub annotation: Option<String>,
    pub summary: Option<String>,
    pub stamp: DateTime<Utc>,
    pub locked: i32,
    pub id: i64,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("patient", "patient", SqlType::BigInt),
    FieldDef::new("module", "module", SqlType::Varchar(150)),
    FieldDef::new("oid", "oid", SqlType::BigInt),
    FieldDef::new("annotation", "annotation", SqlType::Text).nullable(),
    FieldDef::new("summary", "summary", SqlType::Varchar(250)).nullable(),
    FieldDef::new("stamp", "stamp", SqlType::Timestamp),
    FieldDef::new("locked", "locked", SqlType::Integer),
    FieldDef::new("id", "id", SqlType::BigInt),
];

impl Record for PatientEmrRecord {
    fn record_type() -> RecordType {
        RecordType {
            name: "PatientEmrRecord",
            fields: FIELDS,
        }
    }
}

pub fn register(registry: &mut Registry) {
    registry.register_table::<PatientEmrRecord>(TABLE_PATIENT_EMR, None);
}
