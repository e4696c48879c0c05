use serde::{Deserialize, Serialize};

use crate::schema::{FieldDef, Record, RecordType, Registry, SqlType};

pub const TABLE_FACILITY: &str = "facility";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    pub id: i64,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "psrname", SqlType::Varchar(100)),
    FieldDef::new("city", "psrcity", SqlType::Varchar(100)),
    FieldDef::new("state", "psrstate", SqlType::Varchar(3)),
    FieldDef::new("id", "id", SqlType::BigInt),
];

impl Record for FacilityRecord {
    fn record_type() -> RecordType {
        RecordType {
            name: "FacilityRecord",
            fields: FIELDS,
        }
    }
}

pub fn register(registry: &mut Registry) {
    registry.register_table::<FacilityRecord>(TABLE_FACILITY, None);
}
