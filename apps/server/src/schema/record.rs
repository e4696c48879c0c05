//! Record type descriptors.
//!
//! A record type describes the shape of a persistent struct: its Rust name and
//! the ordered list of fields with their backing column and SQL type. The
//! descriptors are `'static` so registration never allocates per field.

/// Column types supported by the DDL generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    BigInt,
    Integer,
    Boolean,
    Text,
    Varchar(u16),
    Date,
    Timestamp,
    Bytes,
}

impl SqlType {
    /// Postgres type name used in `CREATE TABLE`.
    pub fn sql_name(&self) -> String {
        match self {
            SqlType::BigInt => "BIGINT".to_string(),
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::Text => "TEXT".to_string(),
            SqlType::Varchar(len) => format!("VARCHAR({})", len),
            SqlType::Date => "DATE".to_string(),
            SqlType::Timestamp => "TIMESTAMPTZ".to_string(),
            SqlType::Bytes => "BYTEA".to_string(),
        }
    }

    /// Integer keys are generated by the database.
    pub fn is_serial_candidate(&self) -> bool {
        matches!(self, SqlType::BigInt | SqlType::Integer)
    }
}

/// One field of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Field name on the Rust struct (also the JSON name unless overridden).
    pub name: &'static str,
    /// Backing column name.
    pub column: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
}

impl FieldDef {
    pub const fn new(name: &'static str, column: &'static str, sql_type: SqlType) -> Self {
        Self {
            name,
            column,
            sql_type,
            nullable: false,
        }
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// Type descriptor for a persistent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordType {
    pub name: &'static str,
    pub fields: &'static [FieldDef],
}

impl RecordType {
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Implemented by every persistent record struct.
pub trait Record {
    fn record_type() -> RecordType;
}
