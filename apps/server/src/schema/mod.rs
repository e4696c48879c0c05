//! Schema and module registration.
//!
//! Record modules describe their shape with a [`RecordType`] and register it
//! into a [`Registry`] during startup. [`bootstrap`] then validates the
//! registry and makes sure every backing table exists.

mod bootstrap;
mod module;
mod record;
mod registry;
mod table;

pub use bootstrap::bootstrap;
pub use module::{ModuleDefinition, BASE_MODULE_KEY};
pub use record::{FieldDef, Record, RecordType, SqlType};
pub use registry::Registry;
pub use table::{quote_ident, TableDefinition, DEFAULT_PRIMARY_KEY};
