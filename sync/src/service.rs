//! The capability interface to the host platform's schema engine.
//!
//! Everything that compares or mutates a live schema happens behind
//! [`SchemaService`]. Workflows only reshape documents and call these three
//! operations, so they can be exercised against an in-memory fake.

use schema_merge_core::FlatSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Opaque delta produced by the host's diff engine.
///
/// Its structure is owned by the host; this crate only decides whether it
/// describes any change at all.
///
/// # Examples
///
/// ```
/// use schema_merge_sync::SchemaDiff;
/// use serde_json::json;
///
/// assert!(SchemaDiff::new(json!(null)).is_empty());
/// assert!(SchemaDiff::new(json!({"collections": [], "fields": [], "relations": []})).is_empty());
/// assert!(!SchemaDiff::new(json!({"fields": [{"collection": "a", "field": "b"}]})).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDiff(Value);

impl SchemaDiff {
    /// Wraps a host-provided diff value.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns `true` if the diff describes no change.
    ///
    /// `null`, empty arrays, and objects whose members are all empty count
    /// as empty.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.0)
    }

    /// Borrows the raw diff value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwraps the raw diff value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(members) => members.values().all(is_blank),
        _ => false,
    }
}

/// Payload for [`SchemaService::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyRequest {
    /// Content fingerprint of the declared version and the live schema.
    pub hash: String,
    /// Delta to apply.
    pub diff: SchemaDiff,
}

/// Schema operations provided by the host platform.
pub trait SchemaService {
    /// Returns the live schema in flat form.
    fn snapshot(&self) -> Result<FlatSchema>;

    /// Computes the delta that moves `current` (the live schema) toward
    /// `target`.
    ///
    /// Returns `None` when the host reports no differences.
    fn diff(&self, target: &FlatSchema, current: &FlatSchema) -> Result<Option<SchemaDiff>>;

    /// Applies a delta to the live schema.
    fn apply(&self, request: &ApplyRequest) -> Result<()>;
}
