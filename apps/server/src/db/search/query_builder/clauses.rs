//! Clause templates for each parameter kind.
//!
//! Every function here emits fixed SQL text plus `$n` placeholders; the value
//! itself only ever goes into `bind_params`.

use super::bind::{push_int, push_text};
use super::BindValue;
use crate::db::search::escape::contains_pattern;

/// Default clause hiding archived patients.
pub(super) const NOT_ARCHIVED_CLAUSE: &str = "p.ptarchive = FALSE";

pub(super) fn build_text_clause(
    column: &str,
    value: &str,
    bind_params: &mut Vec<BindValue>,
) -> String {
    let idx = push_text(bind_params, contains_pattern(value));
    format!("{} ILIKE ${} ESCAPE '\\'", column, idx)
}

pub(super) fn build_derived_number_clause(
    expression: &str,
    value: i64,
    bind_params: &mut Vec<BindValue>,
) -> String {
    let idx = push_int(bind_params, value);
    format!("{} = ${}", expression, idx)
}
