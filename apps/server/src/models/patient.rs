//! Patient demographics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schema::{FieldDef, Record, RecordType, Registry, SqlType};

pub const TABLE_PATIENT: &str = "patient";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub patient_id: String,
    pub date_of_birth: NaiveDate,
    pub language: Option<String>,
    pub email: Option<String>,
    pub ssn: Option<String>,
    pub dmv: Option<String>,
    pub pcp: Option<i64>,
    pub primary_facility: Option<i64>,
    pub pharmacy: Option<i64>,
    pub archived: bool,
    pub id: i64,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("last_name", "ptlname", SqlType::Varchar(50)),
    FieldDef::new("first_name", "ptfname", SqlType::Varchar(50)),
    FieldDef::new("middle_name", "ptmname", SqlType::Varchar(50)).nullable(),
    FieldDef::new("patient_id", "ptid", SqlType::Varchar(20)),
    FieldDef::new("date_of_birth", "ptdob", SqlType::Date),
    FieldDef::new("language", "ptprimarylanguage", SqlType::Varchar(10)).nullable(),
    FieldDef::new("email", "pemail", SqlType::Varchar(100)).nullable(),
    FieldDef::new("ssn", "ssn", SqlType::Varchar(9)).nullable(),
    FieldDef::new("dmv", "dmv", SqlType::Varchar(30)).nullable(),
    FieldDef::new("pcp", "ptpcp", SqlType::BigInt).nullable(),
    FieldDef::new("primary_facility", "ptprimaryfacility", SqlType::BigInt).nullable(),
    FieldDef::new("pharmacy", "ptpharmacy", SqlType::BigInt).nullable(),
    FieldDef::new("archived", "ptarchive", SqlType::Boolean),
    FieldDef::new("id", "id", SqlType::BigInt),
];

impl Record for PatientRecord {
    fn record_type() -> RecordType {
        RecordType {
            name: "PatientRecord",
            fields: FIELDS,
        }
    }
}

pub fn register(registry: &mut Registry) {
    registry.register_table::<PatientRecord>(TABLE_PATIENT, None);
}
