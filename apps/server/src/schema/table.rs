//! Table definitions and DDL generation.

use super::record::RecordType;

/// Primary key field used when a registration does not name one.
pub const DEFAULT_PRIMARY_KEY: &str = "id";

/// Maps a record type onto a backing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDefinition {
    pub table_name: String,
    pub record_type: RecordType,
    pub primary_key_field: String,
}

impl TableDefinition {
    pub fn new(
        table_name: impl Into<String>,
        record_type: RecordType,
        primary_key_field: Option<&str>,
    ) -> Self {
        let primary_key_field = primary_key_field
            .filter(|k| !k.is_empty())
            .unwrap_or(DEFAULT_PRIMARY_KEY)
            .to_string();
        Self {
            table_name: table_name.into(),
            record_type,
            primary_key_field,
        }
    }

    /// Column backing the primary key, if the key names a real field.
    pub fn primary_key_column(&self) -> Option<&'static str> {
        self.record_type
            .field(&self.primary_key_field)
            .map(|f| f.column)
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this definition.
    ///
    /// Integer primary keys become `BIGSERIAL`/`SERIAL` so the database assigns
    /// them on insert.
    pub fn create_table_sql(&self) -> String {
        let mut columns = Vec::with_capacity(self.record_type.fields.len());
        for field in self.record_type.fields {
            let is_key = field.name == self.primary_key_field;
            let type_name = if is_key && field.sql_type.is_serial_candidate() {
                match field.sql_type {
                    super::SqlType::Integer => "SERIAL".to_string(),
                    _ => "BIGSERIAL".to_string(),
                }
            } else {
                field.sql_type.sql_name()
            };

            let mut column = format!("{} {}", quote_ident(field.column), type_name);
            if is_key {
                column.push_str(" PRIMARY KEY");
            } else if !field.nullable {
                column.push_str(" NOT NULL");
            }
            columns.push(column);
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            quote_ident(&self.table_name),
            columns.join(", ")
        )
    }
}

/// Double-quote an identifier for Postgres.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
