//! Product record

use crate::core::filter::FieldSource;
use crate::core::sort::SORT_FIELD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Keys owned by the store; client bodies cannot set them
pub const RESERVED_FIELDS: &[&str] = &["id", "created_at", "updated_at"];

/// A catalog product
///
/// Apart from its identity and timestamps a product is an open JSON object.
/// Nothing in the listing pipeline validates its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a product from client-supplied attributes
    pub fn new(attributes: Map<String, Value>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            attributes: strip_reserved(attributes),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge attributes into the product, later keys win
    pub fn merge(&mut self, attributes: Map<String, Value>) {
        for (key, value) in strip_reserved(attributes) {
            self.attributes.insert(key, value);
        }
        self.touch();
    }

    /// Update the timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Numeric price, if the product has one
    pub fn price(&self) -> Option<f64> {
        self.attributes.get(SORT_FIELD).and_then(Value::as_f64)
    }
}

impl FieldSource for Product {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::String(self.id.to_string())),
            "created_at" => Some(Value::String(self.created_at.to_rfc3339())),
            "updated_at" => Some(Value::String(self.updated_at.to_rfc3339())),
            _ => self.attributes.get(name).cloned(),
        }
    }
}

fn strip_reserved(mut attributes: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_FIELDS {
        attributes.remove(*key);
    }
    attributes
}
