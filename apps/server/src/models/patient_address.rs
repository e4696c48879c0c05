//! Patient postal addresses. Only the row with `active = TRUE` is current.

use serde::{Deserialize, Serialize};

use crate::schema::{FieldDef, Record, RecordType, Registry, SqlType};

pub const TABLE_PATIENT_ADDRESS: &str = "patient_address";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientAddressRecord {
    #[serde(rename = "patient_id")]
    pub patient: i64,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    #[serde(rename = "state")]
    pub stpr: String,
    pub postal: String,
    pub country: Option<String>,
    pub active: bool,
    pub id: i64,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("patient", "patient", SqlType::BigInt),
    FieldDef::new("line1", "line1", SqlType::Varchar(150)),
    FieldDef::new("line2", "line2", SqlType::Varchar(150)).nullable(),
    FieldDef::new("city", "city", SqlType::Varchar(150)),
    FieldDef::new("stpr", "stpr", SqlType::Varchar(3)),
    FieldDef::new("postal", "postal", SqlType::Varchar(10)),
    FieldDef::new("country", "country", SqlType::Varchar(100)).nullable(),
    FieldDef::new("active", "active", SqlType::Boolean),
    FieldDef::new("id", "id", SqlType::BigInt),
];

impl Record for PatientAddressRecord {
    fn record_type() -> RecordType {
        RecordType {
            name: "PatientAddressRecord",
            fields: FIELDS,
        }
    }
}

pub fn register(registry: &mut Registry) {
    registry.register_table::<PatientAddressRecord>(TABLE_PATIENT_ADDRESS, None);
}
