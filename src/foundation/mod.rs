//! Core vocabulary of the validation system.
//!
//! This module defines the building blocks everything else composes:
//!
//! - **Messages**: [`Message`], static or value-derived error text
//! - **Rules**: [`Rule`], [`RuleOutcome`], [`Preprocessor`]
//! - **Reports**: [`SchemaError`], the structured validation failure
//!
//! # Architecture
//!
//! A rule check is a pure function of `(value, whole_object)` producing a
//! [`RuleOutcome`]. Passing the whole object into every check is what makes
//! cross-field rules (`equals`, `greater`, ...) possible without any shared
//! state: a field's rules read other fields through an immutable view of the
//! record being validated.
//!
//! Validation itself is pure as well: builders own configuration only, and
//! each validation call returns its error list directly. The same schema can
//! safely validate any number of objects in sequence with no carry-over.

pub mod error;
pub mod message;
pub mod rule;

pub use error::{KEY_MISMATCH_MESSAGE, KEYS_ENTRY, SchemaError};
pub use message::{Message, display_value};
pub use rule::{Check, Preprocessor, Rule, RuleOutcome};
