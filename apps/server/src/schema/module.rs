//! EMR module definitions.

use super::record::RecordType;

/// Key of the base module. Never shown to users.
pub const BASE_MODULE_KEY: &str = "";

/// Associates an EMR module key with the record type stored for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDefinition {
    pub module_key: String,
    pub record_type: RecordType,
}

impl ModuleDefinition {
    pub fn new(module_key: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            module_key: module_key.into(),
            record_type,
        }
    }

    pub fn is_base(&self) -> bool {
        self.module_key == BASE_MODULE_KEY
    }
}
