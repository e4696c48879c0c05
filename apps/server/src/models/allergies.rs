use serde::{Deserialize, Serialize};

use crate::schema::{FieldDef, Record, RecordType, Registry, SqlType};

pub const TABLE_ALLERGIES: &str = "allergies";
pub const MODULE_ALLERGIES: &str = "allergies";

/// Value of `active` for a current allergy.
pub const ALLERGY_ACTIVE: &str = "active";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllergyRecord {
    #[serde(rename = "patient_id")]
    pub patient: i64,
    pub allergy: String,
    pub reaction: Option<String>,
    pub severity: Option<String>,
    pub active: String,
    pub id: i64,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("patient", "patient", SqlType::BigInt),
    FieldDef::new("allergy", "allergy", SqlType::Text),
    FieldDef::new("reaction", "reaction", SqlType::Text).nullable(),
    FieldDef::new("severity", "severity", SqlType::Varchar(150)).nullable(),
    FieldDef::new("active", "active", SqlType::Varchar(8)),
    FieldDef::new("id", "id", SqlType::BigInt),
];

impl Record for AllergyRecord {
    fn record_type() -> RecordType {
        RecordType {
            name: "AllergyRecord",
            fields: FIELDS,
        }
    }
}

pub fn register(registry: &mut Registry) {
    registry.register_table::<AllergyRecord>(TABLE_ALLERGIES, None);
    registry.register_module::<AllergyRecord>(MODULE_ALLERGIES);
}
