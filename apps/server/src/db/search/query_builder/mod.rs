//! SQL predicate and query builder for patient searches.
//!
//! Builds a parameterized WHERE clause from [`SearchCriteria`]:
//! - one fragment per recognized, specified parameter, in a fixed order
//! - the default "not archived" fragment unless `archive` is true
//! - bound values in placeholder order
//!
//! Clause text depends only on which parameters are present, never on their
//! values.

use super::params::{ParamKind, ParamValue, SearchCriteria, AGE_EXPRESSION};
use crate::models::{TABLE_PATIENT, TABLE_PATIENT_ADDRESS};
use crate::schema::quote_ident;
use crate::{Error, Result};

mod bind;
mod clauses;

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

/// Ordered clause templates and the values for their placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    clauses: Vec<String>,
    binds: Vec<BindValue>,
}

impl Predicate {
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    pub fn binds(&self) -> &[BindValue] {
        &self.binds
    }

    /// Conjunction of all clauses, or `TRUE` when there are none.
    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            "TRUE".to_string()
        } else {
            self.clauses.join(" AND ")
        }
    }

}

/// Build the search predicate for `criteria`.
///
/// Fails with `InvalidRequest` when the criteria are empty or contain no usable
/// filter. The `archive` toggle alone is not a filter.
pub fn build_predicate(criteria: &SearchCriteria) -> Result<Predicate> {
    if criteria.is_empty() {
        return Err(Error::InvalidRequest(
            "At least one search parameter is required".to_string(),
        ));
    }

    let mut predicate = Predicate::default();
    let mut include_archived = false;

    for (param, value) in criteria.resolved() {
        let clause = match (param.kind(), value) {
            (ParamKind::Text { column }, ParamValue::Text(v)) => {
                clauses::build_text_clause(column, &v, &mut predicate.binds)
            }
            (ParamKind::DerivedNumber { expression }, ParamValue::Number(n)) => {
                clauses::build_derived_number_clause(expression, n, &mut predicate.binds)
            }
            // `archive` is the only toggle.
            (ParamKind::Toggle, ParamValue::Toggle(on)) => {
                include_archived = on;
                continue;
            }
            // `coerce` only yields values matching the declared kind.
            _ => continue,
        };
        predicate.clauses.push(clause);
    }

    if predicate.clauses.is_empty() {
        return Err(Error::InvalidRequest(
            "No usable search parameters found".to_string(),
        ));
    }

    if !include_archived {
        predicate
            .clauses
            .push(clauses::NOT_ARCHIVED_CLAUSE.to_string());
    }

    Ok(predicate)
}

/// Full patient search query around a [`Predicate`].
#[derive(Debug, Clone)]
pub struct PatientSearchQuery {
    predicate: Predicate,
    limit: usize,
}

impl PatientSearchQuery {
    pub fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            limit: 20,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// At most one active address (the oldest) joins each patient, so a
    /// patient is returned once.
    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let sql = format!(
            "SELECT p.ptlname AS last_name, p.ptfname AS first_name, p.ptmname AS middle_name, \
             p.ptid AS patient_id, {age} AS age, p.ptdob AS date_of_birth, p.id AS id \
             FROM {patient} p \
             LEFT OUTER JOIN LATERAL (\
             SELECT a.city, a.postal FROM {address} a \
             WHERE a.patient = p.id AND a.active = TRUE \
             ORDER BY a.id LIMIT 1\
             ) pa ON TRUE \
             WHERE {filter} \
             ORDER BY p.ptlname, p.ptfname, p.ptmname, p.id \
             LIMIT {limit}",
            age = AGE_EXPRESSION,
            patient = quote_ident(TABLE_PATIENT),
            address = quote_ident(TABLE_PATIENT_ADDRESS),
            filter = self.predicate.where_clause(),
            limit = self.limit,
        );
        (sql, self.predicate.binds.clone())
    }
}
