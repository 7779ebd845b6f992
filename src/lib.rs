//! # exterminator
//!
//! Declarative field-rule validation for JSON-like objects.
//!
//! Callers define a schema mapping field names to chained rule builders,
//! then validate `serde_json` objects against it, collecting per-field
//! human-readable error messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use exterminator::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::builder()
//!     .field("username", string().trim().required().min(3).max(20))
//!     .field("email", string().email(EmailOptions::default()))
//!     .field("age", number().required().positive().integer())
//!     .build();
//!
//! let object = json!({
//!     "username": "  alice  ",
//!     "email": "alice@example.com",
//!     "age": 30,
//! });
//! assert!(schema.validate(object.as_object().unwrap()).is_ok());
//! ```
//!
//! ## Semantics
//!
//! - The schema's field names and the object's keys must be equal as sets;
//!   any mismatch short-circuits to a key-mismatch report before any rule
//!   runs.
//! - Within a field, rules run in declaration order and never short-circuit:
//!   every failing rule contributes its message to that field's error list.
//! - Cross-field rules (`equals`, `greater`, ...) read the named field's raw
//!   value from the object being validated, never a preprocessed one.
//! - Validation is a pure function of `(schema, object)`: no I/O, no stored
//!   state, identical results on repeated calls.

pub mod foundation;
pub mod prelude;
pub mod rules;
pub mod schema;

pub use foundation::{Message, Rule, RuleOutcome, SchemaError};
pub use rules::{
    EmailOptions, FieldValidator, NumberRules, PhoneRegion, StringRules, number, string,
};
pub use schema::{Schema, SchemaBuilder};
