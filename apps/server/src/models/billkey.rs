use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{FieldDef, Record, RecordType, Registry, SqlType};

pub const TABLE_BILLKEY: &str = "billkey";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillkeyRecord {
    pub date: DateTime<Utc>,
    #[serde(rename = "key")]
    pub data: Vec<u8>,
    pub procedures: String,
    pub id: i64,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("date", "billkeydate", SqlType::Timestamp),
    FieldDef::new("data", "billkey", SqlType::Bytes),
    FieldDef::new("procedures", "bkprocs", SqlType::Text),
    FieldDef::new("id", "id", SqlType::BigInt),
];

impl Record for BillkeyRecord {
    fn record_type() -> RecordType {
        RecordType {
            name: "BillkeyRecord",
            fields: FIELDS,
        }
    }
}

pub fn register(registry: &mut Registry) {
    registry.register_table::<BillkeyRecord>(TABLE_BILLKEY, Some("id"));
}
