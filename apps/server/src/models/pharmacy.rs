use serde::{Deserialize, Serialize};

use crate::schema::{FieldDef, Record, RecordType, Registry, SqlType};

pub const TABLE_PHARMACY: &str = "pharmacy";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PharmacyRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    pub id: i64,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "phname", SqlType::Varchar(100)),
    FieldDef::new("city", "phcity", SqlType::Varchar(100)),
    FieldDef::new("state", "phstate", SqlType::Varchar(3)),
    FieldDef::new("id", "id", SqlType::BigInt),
];

impl Record for PharmacyRecord {
    fn record_type() -> RecordType {
        RecordType {
            name: "PharmacyRecord",
            fields: FIELDS,
        }
    }
}

pub fn register(registry: &mut Registry) {
    registry.register_table::<PharmacyRecord>(TABLE_PHARMACY, None);
}
