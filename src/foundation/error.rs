//! The structured validation failure report.
//!
//! Schema validation either succeeds (`Ok(())`) or produces a [`SchemaError`]
//! describing everything that went wrong. Two failure classes exist, and they
//! never mix in one report:
//!
//! - **Key mismatch**: the schema's field names and the object's keys are not
//!   the same set. This preempts all per-field checks; the report carries a
//!   single generic message under the reserved `"keys"` entry.
//! - **Field errors**: one or more fields failed their rules. The report maps
//!   each failing field name to the full, ordered list of its rule messages.
//!
//! The report serializes to the wire shape
//! `{"message": "Validation failed", "errors": {...}}`.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use thiserror::Error;

/// Generic message reported when schema fields and object keys differ.
pub const KEY_MISMATCH_MESSAGE: &str = "Schema fields and object keys do not match";

/// Reserved entry name for key-mismatch reports.
pub const KEYS_ENTRY: &str = "keys";

/// A failed validation run.
///
/// # Examples
///
/// ```rust,ignore
/// use exterminator::prelude::*;
/// use serde_json::json;
///
/// let schema = Schema::builder().field("name", string().required()).build();
/// let object = json!({ "name": "" });
///
/// let err = schema.validate(object.as_object().unwrap()).unwrap_err();
/// assert!(err.field_errors("name").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Schema field names and object keys are not the same set. No per-field
    /// validation ran.
    #[error("Validation failed: {}", .keys.join("; "))]
    KeyMismatch {
        /// The generic mismatch message(s) reported under the `"keys"` entry.
        keys: Vec<String>,
    },

    /// One or more fields failed their rules.
    #[error("Validation failed: {} field(s) invalid", .0.len())]
    Fields(BTreeMap<String, Vec<String>>),
}

impl SchemaError {
    /// Creates the key-mismatch report with the standard generic message.
    #[must_use]
    pub fn key_mismatch() -> Self {
        Self::KeyMismatch {
            keys: vec![KEY_MISMATCH_MESSAGE.to_string()],
        }
    }

    /// Returns true if this report is the key-mismatch failure.
    #[must_use]
    pub fn is_key_mismatch(&self) -> bool {
        matches!(self, Self::KeyMismatch { .. })
    }

    /// Returns the error messages recorded for a field, if any.
    #[must_use]
    pub fn field_errors(&self, name: &str) -> Option<&[String]> {
        match self {
            Self::Fields(fields) => fields.get(name).map(Vec::as_slice),
            Self::KeyMismatch { .. } => None,
        }
    }

    /// Number of failing entries in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::KeyMismatch { .. } => 1,
            Self::Fields(fields) => fields.len(),
        }
    }

    /// Always false: an error report is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Converts the report to its JSON wire shape.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let errors = match self {
            Self::KeyMismatch { keys } => json!({ KEYS_ENTRY: keys }),
            Self::Fields(fields) => json!(fields),
        };
        json!({
            "message": "Validation failed",
            "errors": errors,
        })
    }
}

impl Serialize for SchemaError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}

// ============================================================================
// TESTS
// ============================================================================
