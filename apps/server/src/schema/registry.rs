//! Registry of table and module definitions.
//!
//! The registry is built once during startup by each record module's
//! `register` function, validated by the bootstrap step, and then shared
//! read-only (behind an `Arc`) with request handlers.

use std::collections::HashSet;

use super::module::ModuleDefinition;
use super::record::{Record, RecordType};
use super::table::TableDefinition;
use crate::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    tables: Vec<TableDefinition>,
    modules: Vec<ModuleDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `R` under `table_name`.
    ///
    /// Duplicates are accepted here and rejected by [`Registry::validate`].
    pub fn register_table<R: Record>(&mut self, table_name: &str, primary_key_field: Option<&str>) {
        self.register_table_definition(TableDefinition::new(
            table_name,
            R::record_type(),
            primary_key_field,
        ));
    }

    pub fn register_table_definition(&mut self, definition: TableDefinition) {
        tracing::debug!(
            table = %definition.table_name,
            record_type = definition.record_type.name,
            primary_key = %definition.primary_key_field,
            "Registering table"
        );
        self.tables.push(definition);
    }

    pub fn register_module<R: Record>(&mut self, module_key: &str) {
        self.register_module_definition(ModuleDefinition::new(module_key, R::record_type()));
    }

    pub fn register_module_definition(&mut self, definition: ModuleDefinition) {
        tracing::debug!(
            module = %definition.module_key,
            record_type = definition.record_type.name,
            "Registering module"
        );
        self.modules.push(definition);
    }

    pub fn tables(&self) -> &[TableDefinition] {
        &self.tables
    }

    /// Lookup by table name, for diagnostics.
    pub fn table(&self, table_name: &str) -> Option<&TableDefinition> {
        self.tables.iter().find(|t| t.table_name == table_name)
    }

    /// Table backing a record type, if registered.
    pub fn table_for(&self, record_type: &RecordType) -> Option<&TableDefinition> {
        self.tables.iter().find(|t| t.record_type == *record_type)
    }

    pub fn module(&self, module_key: &str) -> Option<&ModuleDefinition> {
        self.modules.iter().find(|m| m.module_key == module_key)
    }

    /// Modules a user may list attachments for (the base module is excluded).
    pub fn listed_modules(&self) -> impl Iterator<Item = &ModuleDefinition> {
        self.modules.iter().filter(|m| !m.is_base())
    }

    pub fn is_listed_module(&self, module_key: &str) -> bool {
        self.listed_modules().any(|m| m.module_key == module_key)
    }

    /// Check every registration invariant.
    ///
    /// Reports all problems found in one `SchemaRegistrationConflict`.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        let mut seen_tables = HashSet::new();
        for table in &self.tables {
            if table.table_name.is_empty() {
                problems.push(format!(
                    "record type {} registered with an empty table name",
                    table.record_type.name
                ));
            }
            if !seen_tables.insert(table.table_name.as_str()) {
                problems.push(format!("table {} registered twice", table.table_name));
            }
            if table.primary_key_column().is_none() {
                problems.push(format!(
                    "table {}: primary key {} is not a field of {}",
                    table.table_name, table.primary_key_field, table.record_type.name
                ));
            }
        }

        let mut seen_modules = HashSet::new();
        for module in &self.modules {
            if !seen_modules.insert(module.module_key.as_str()) {
                problems.push(format!("module {:?} registered twice", module.module_key));
            }
            if self.table_for(&module.record_type).is_none() {
                problems.push(format!(
                    "module {:?}: record type {} has no registered table",
                    module.module_key, module.record_type.name
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::SchemaRegistrationConflict(problems.join("; ")))
        }
    }
}
