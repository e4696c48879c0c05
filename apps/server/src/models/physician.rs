use serde::{Deserialize, Serialize};

use crate::schema::{FieldDef, Record, RecordType, Registry, SqlType};

pub const TABLE_PHYSICIAN: &str = "physician";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicianRecord {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub id: i64,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("last_name", "phylname", SqlType::Varchar(52)),
    FieldDef::new("first_name", "phyfname", SqlType::Varchar(50)),
    FieldDef::new("middle_name", "phymname", SqlType::Varchar(50)).nullable(),
    FieldDef::new("id", "id", SqlType::BigInt),
];

impl Record for PhysicianRecord {
    fn record_type() -> RecordType {
        RecordType {
            name: "PhysicianRecord",
            fields: FIELDS,
        }
    }
}

pub fn register(registry: &mut Registry) {
    registry.register_table::<PhysicianRecord>(TABLE_PHYSICIAN, None);
}
