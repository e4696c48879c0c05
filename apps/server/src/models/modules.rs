//! Installed module metadata.

use serde::{Deserialize, Serialize};

use crate::schema::{FieldDef, Record, RecordType, Registry, SqlType};

pub const TABLE_MODULES: &str = "modules";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleMetadataRecord {
    pub module_name: String,
    pub module_class: String,
    pub module_table: String,
    pub module_version: Option<String>,
    pub module_hidden: bool,
    pub id: i64,
}

const FIELDS: &[FieldDef] = &[
    FieldDef::new("module_name", "module_name", SqlType::Varchar(100)),
    FieldDef::new("module_class", "module_class", SqlType::Varchar(100)),
    FieldDef::new("module_table", "module_table", SqlType::Varchar(100)),
    FieldDef::new("module_version", "module_version", SqlType::Varchar(50)).nullable(),
    FieldDef::new("module_hidden", "module_hidden", SqlType::Boolean),
    FieldDef::new("id", "id", SqlType::BigInt),
];

impl Record for ModuleMetadataRecord {
    fn record_type() -> RecordType {
        RecordType {
            name: "ModuleMetadataRecord",
            fields: FIELDS,
        }
    }
}

pub fn register(registry: &mut Registry) {
    registry.register_table::<ModuleMetadataRecord>(TABLE_MODULES, None);
}
