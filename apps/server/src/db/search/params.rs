//! Patient search criteria and the static parameter table.
//!
//! Criteria arrive as an untyped JSON object. Each key is looked up in the
//! [`SearchParam`] table, which declares the kind of value it expects; values of
//! any other JSON type are dropped rather than failing the request.

use serde_json::{Map, Value};

use crate::{Error, Result};

/// Recognized search parameters.
///
/// Declaration order is the order in which fragments are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchParam {
    LastName,
    FirstName,
    PatientId,
    Age,
    City,
    Zip,
    Email,
    Ssn,
    Dmv,
    Archive,
}

/// How a parameter matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Case-insensitive partial match on a column.
    Text { column: &'static str },
    /// Integer equality against an expression computed by the server.
    DerivedNumber { expression: &'static str },
    /// Boolean switch that changes the default clauses.
    Toggle,
}

/// Age in whole years, computed from the date of birth.
pub const AGE_EXPRESSION: &str = "date_part('year', age(p.ptdob))::bigint";

impl SearchParam {
    pub const ALL: [SearchParam; 10] = [
        SearchParam::LastName,
        SearchParam::FirstName,
        SearchParam::PatientId,
        SearchParam::Age,
        SearchParam::City,
        SearchParam::Zip,
        SearchParam::Email,
        SearchParam::Ssn,
        SearchParam::Dmv,
        SearchParam::Archive,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SearchParam::LastName => "last_name",
            SearchParam::FirstName => "first_name",
            SearchParam::PatientId => "patient_id",
            SearchParam::Age => "age",
            SearchParam::City => "city",
            SearchParam::Zip => "zip",
            SearchParam::Email => "email",
            SearchParam::Ssn => "ssn",
            SearchParam::Dmv => "dmv",
            SearchParam::Archive => "archive",
        }
    }

    pub fn kind(&self) -> ParamKind {
        match self {
            SearchParam::LastName => ParamKind::Text {
                column: "p.ptlname",
            },
            SearchParam::FirstName => ParamKind::Text {
                column: "p.ptfname",
            },
            SearchParam::PatientId => ParamKind::Text { column: "p.ptid" },
            SearchParam::Age => ParamKind::DerivedNumber {
                expression: AGE_EXPRESSION,
            },
            SearchParam::City => ParamKind::Text { column: "pa.city" },
            SearchParam::Zip => ParamKind::Text {
                column: "pa.postal",
            },
            SearchParam::Email => ParamKind::Text {
                column: "p.pemail",
            },
            SearchParam::Ssn => ParamKind::Text { column: "p.ssn" },
            SearchParam::Dmv => ParamKind::Text { column: "p.dmv" },
            SearchParam::Archive => ParamKind::Toggle,
        }
    }

    /// Coerce a raw value to this parameter's kind.
    ///
    /// Returns `None` for ill-typed values and for "not specified" values
    /// (empty string, numeric zero). Strings containing NUL cannot be stored
    /// as Postgres text and count as ill-typed.
    pub fn coerce(&self, value: &Value) -> Option<ParamValue> {
        match (self.kind(), value) {
            (ParamKind::Text { .. }, Value::String(s)) if !s.is_empty() && !s.contains('\0') => {
                Some(ParamValue::Text(s.clone()))
            }
            (ParamKind::DerivedNumber { .. }, Value::Number(n)) => {
                // Fractions truncate toward zero.
                let n = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
                (n != 0).then_some(ParamValue::Number(n))
            }
            (ParamKind::Toggle, Value::Bool(b)) => Some(ParamValue::Toggle(*b)),
            _ => None,
        }
    }
}

/// A parameter value after coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Number(i64),
    Toggle(bool),
}

/// Client-supplied search criteria for one request.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    entries: Map<String, Value>,
}

impl SearchCriteria {
    /// Parse a request body. Anything but a JSON object is an invalid request.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| Error::InvalidRequest(format!("Malformed search payload: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(Error::InvalidRequest(format!(
                "Search criteria must be a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameter names as supplied, for logging. Values are never logged.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Recognized, well-typed, specified entries in emission order.
    pub fn resolved(&self) -> Vec<(SearchParam, ParamValue)> {
        let mut resolved: Vec<_> = self
            .entries
            .iter()
            .filter_map(|(name, value)| {
                let param = SearchParam::from_name(name)?;
                match param.coerce(value) {
                    Some(v) => Some((param, v)),
                    None => {
                        tracing::debug!(param = %name, "Skipping unusable search parameter");
                        None
                    }
                }
            })
            .collect();
        resolved.sort_by_key(|(param, _)| *param);
        resolved
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
