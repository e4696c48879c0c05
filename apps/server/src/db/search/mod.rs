//! Patient search: criteria parsing and parameterized query construction.

pub mod escape;
pub mod params;
pub mod query_builder;

pub use params::{ParamKind, ParamValue, SearchCriteria, SearchParam};
pub use query_builder::{build_predicate, BindValue, PatientSearchQuery, Predicate};
