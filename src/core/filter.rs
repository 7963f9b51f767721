//! Filter expressions for product listings
//!
//! The `query` request parameter carries a JSON object. It is decoded into a
//! [`FieldMatchMap`]: an ordered map of field name to the criteria a record
//! must satisfy. All criteria of all fields must hold (conjunction).
//!
//! # Format
//! - Exact match: `{"category": "tools"}`
//! - Suffix comparison: `{"price>": 10, "price<=": 99.5}`
//! - Operator object: `{"price": {"$gte": 10, "$lt": 100}}`,
//!   `{"category": {"$in": ["tools", "garden"]}}`
//!
//! Field names are not checked against any schema. A field that does not
//! exist on a record only matches `null` equality (and `$ne`/`$nin`).

use crate::core::error::QueryError;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// A single predicate over one field value
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Eq(Value),
    Ne(Value),
    Gt(Value),
    Gte(Value),
    Lt(Value),
    Lte(Value),
    In(Vec<Value>),
    Nin(Vec<Value>),
}

impl Criterion {
    /// Evaluate against a record's field value (`None` when the field is absent)
    pub fn matches(&self, actual: Option<&Value>) -> bool {
        let actual_or_null = actual.unwrap_or(&Value::Null);

        match self {
            Criterion::Eq(expected) => values_equal(actual_or_null, expected),
            Criterion::Ne(expected) => !values_equal(actual_or_null, expected),
            Criterion::Gt(bound) => compare(actual, bound) == Some(Ordering::Greater),
            Criterion::Gte(bound) => matches!(
                compare(actual, bound),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Criterion::Lt(bound) => compare(actual, bound) == Some(Ordering::Less),
            Criterion::Lte(bound) => matches!(
                compare(actual, bound),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Criterion::In(candidates) => candidates
                .iter()
                .any(|candidate| values_equal(actual_or_null, candidate)),
            Criterion::Nin(candidates) => !candidates
                .iter()
                .any(|candidate| values_equal(actual_or_null, candidate)),
        }
    }

    fn from_operator(op: &str, operand: Value) -> Result<Self, String> {
        match op {
            "$eq" => Ok(Criterion::Eq(operand)),
            "$ne" => Ok(Criterion::Ne(operand)),
            "$gt" => Ok(Criterion::Gt(operand)),
            "$gte" => Ok(Criterion::Gte(operand)),
            "$lt" => Ok(Criterion::Lt(operand)),
            "$lte" => Ok(Criterion::Lte(operand)),
            "$in" | "$nin" => {
                let Value::Array(items) = operand else {
                    return Err(format!("operator '{}' expects an array", op));
                };
                if op == "$in" {
                    Ok(Criterion::In(items))
                } else {
                    Ok(Criterion::Nin(items))
                }
            }
            other => Err(format!("unsupported operator '{}'", other)),
        }
    }
}

/// Numbers compare by value so that `10` equals `10.0`
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

/// Ordering is only defined between two numbers or two strings
fn compare(actual: Option<&Value>, bound: &Value) -> Option<Ordering> {
    match (actual?, bound) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// Anything a filter can be evaluated against
pub trait FieldSource {
    /// Value of the named field, `None` when absent
    fn field(&self, name: &str) -> Option<Value>;
}

impl FieldSource for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Decoded filter: field name → criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMatchMap {
    criteria: IndexMap<String, Vec<Criterion>>,
}

impl FieldMatchMap {
    /// Empty filter, matches every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the raw `query` parameter
    ///
    /// Absent or blank input is the empty filter. Anything that is not a
    /// JSON object of supported criteria is a [`QueryError::MalformedFilter`];
    /// the caller chooses whether to reject the request or drop the filter.
    pub fn parse(raw: Option<&str>) -> Result<Self, QueryError> {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::new());
        };

        let malformed = |message: String| QueryError::MalformedFilter {
            raw: raw.to_string(),
            message,
        };

        let value: Value = serde_json::from_str(raw).map_err(|e| malformed(e.to_string()))?;
        let Value::Object(object) = value else {
            return Err(malformed("expected a JSON object".to_string()));
        };

        Self::from_object(object).map_err(malformed)
    }

    fn from_object(object: Map<String, Value>) -> Result<Self, String> {
        let mut filter = Self::new();

        for (key, value) in object {
            if let Some((field, criterion)) = split_suffix_comparison(&key, &value) {
                if field.is_empty() {
                    return Err(format!("comparison '{}' has no field name", key));
                }
                filter.insert(field, criterion);
                continue;
            }

            match value {
                Value::Object(ops) if ops.keys().any(|k| k.starts_with('$')) => {
                    if !ops.keys().all(|k| k.starts_with('$')) {
                        return Err(format!(
                            "field '{}' mixes operators and plain keys",
                            key
                        ));
                    }
                    for (op, operand) in ops {
                        filter.insert(&key, Criterion::from_operator(&op, operand)?);
                    }
                }
                other => filter.insert(&key, Criterion::Eq(other)),
            }
        }

        Ok(filter)
    }

    /// Add a criterion for a field
    pub fn insert(&mut self, field: &str, criterion: Criterion) {
        self.criteria
            .entry(field.to_string())
            .or_default()
            .push(criterion);
    }

    /// Criteria registered for a field
    pub fn get(&self, field: &str) -> Option<&[Criterion]> {
        self.criteria.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Number of distinct fields constrained
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Criterion])> {
        self.criteria
            .iter()
            .map(|(field, criteria)| (field.as_str(), criteria.as_slice()))
    }

    /// Whether a record satisfies every criterion
    pub fn matches<S: FieldSource + ?Sized>(&self, record: &S) -> bool {
        self.criteria.iter().all(|(field, criteria)| {
            let actual = record.field(field);
            criteria.iter().all(|c| c.matches(actual.as_ref()))
        })
    }
}

fn split_suffix_comparison<'k>(key: &'k str, value: &Value) -> Option<(&'k str, Criterion)> {
    // two-character suffixes first so "price>=" is not read as "price>" + "="
    if let Some(field) = key.strip_suffix(">=") {
        return Some((field, Criterion::Gte(value.clone())));
    }
    if let Some(field) = key.strip_suffix("<=") {
        return Some((field, Criterion::Lte(value.clone())));
    }
    if let Some(field) = key.strip_suffix('>') {
        return Some((field, Criterion::Gt(value.clone())));
    }
    if let Some(field) = key.strip_suffix('<') {
        return Some((field, Criterion::Lt(value.clone())));
    }
    None
}
