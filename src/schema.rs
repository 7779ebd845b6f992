//! Schema-level validation.
//!
//! A [`Schema`] maps field names to configured field validators and checks
//! whole objects in one call. Build it once, validate as many objects as
//! needed:
//!
//! ```rust,ignore
//! use exterminator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::builder()
//!     .field("username", string().required().min(3))
//!     .field("age", number().required().positive())
//!     .build();
//!
//! let object = json!({ "username": "alice", "age": 30 });
//! assert!(schema.validate(object.as_object().unwrap()).is_ok());
//! ```
//!
//! Key-set equality is checked first: every schema field must have exactly
//! one corresponding object key and vice versa. Any mismatch preempts all
//! per-field validation and produces the key-mismatch report.

use serde_json::{Map, Value};

use crate::foundation::SchemaError;
use crate::rules::FieldValidator;

/// An ordered, unique mapping from field name to its configured validator.
///
/// Immutable once built; validation never mutates the schema, so one schema
/// can check any number of objects sequentially.
#[derive(Debug)]
pub struct Schema {
    fields: Vec<(String, FieldValidator)>,
}

impl Schema {
    /// Starts building a schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates an object against this schema.
    ///
    /// 1. If the sorted set of schema field names differs from the sorted set
    ///    of object keys (missing, extra, or both), the result is the
    ///    key-mismatch report and no per-field rule runs.
    /// 2. Otherwise every field validator runs in schema order against
    ///    `(object[name], object)`; each failing field's full message list
    ///    lands in the report.
    ///
    /// Returns `Ok(())` when every field passes. Never panics; all failure
    /// information funnels into the returned [`SchemaError`].
    pub fn validate(&self, object: &Map<String, Value>) -> Result<(), SchemaError> {
        if !self.keys_match(object) {
            return Err(SchemaError::key_mismatch());
        }

        let mut errors = std::collections::BTreeMap::new();
        for (name, validator) in &self.fields {
            // Present by the key-set check above.
            let Some(value) = object.get(name) else {
                continue;
            };
            let messages = validator.check(value, object);
            if !messages.is_empty() {
                errors.insert(name.clone(), messages);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::Fields(errors))
        }
    }

    fn keys_match(&self, object: &Map<String, Value>) -> bool {
        if self.fields.len() != object.len() {
            return false;
        }
        let mut schema_keys: Vec<&str> = self.field_names().collect();
        let mut object_keys: Vec<&str> = object.keys().map(String::as_str).collect();
        schema_keys.sort_unstable();
        object_keys.sort_unstable();
        schema_keys == object_keys
    }
}

/// Builder for [`Schema`].
///
/// Re-declaring a field name replaces the earlier declaration, preserving
/// map semantics (one validator per field).
#[derive(Debug)]
pub struct SchemaBuilder {
    fields: Vec<(String, FieldValidator)>,
}

impl SchemaBuilder {
    /// Declares a field with its configured rules.
    ///
    /// Accepts either builder directly: `string()...` or `number()...`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rules: impl Into<FieldValidator>) -> Self {
        let name = name.into();
        let validator = rules.into();
        if let Some(entry) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = validator;
        } else {
            self.fields.push((name, validator));
        }
        self
    }

    /// Finishes the schema.
    #[must_use]
    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
