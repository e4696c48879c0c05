use serde::{Deserialize, Serialize};

use crate::schema::{FieldDef, Record, RecordType, Registry, SqlType};

pub const TABLE_APPOINTMENT_TEMPLATE: &str = "appttemplate";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentTemplateRecord {
    pub name: String,
    /// Minutes.
    pub duration: i32,
    pub equipment: Vec<u8>,
    pub color: String,
    pub id: i64,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("name", "atname", SqlType::Varchar(50)),
    FieldDef::new("duration", "atduration", SqlType::Integer),
    FieldDef::new("equipment", "atequipment", SqlType::Bytes),
    FieldDef::new("color", "atcolor", SqlType::Varchar(7)),
    FieldDef::new("id", "id", SqlType::BigInt),
];

impl Record for AppointmentTemplateRecord {
    fn record_type() -> RecordType {
        RecordType {
            name: "AppointmentTemplateRecord",
            fields: FIELDS,
        }
    }
}

pub fn register(registry: &mut Registry) {
    registry.register_table::<AppointmentTemplateRecord>(TABLE_APPOINTMENT_TEMPLATE, Some("id"));
}
