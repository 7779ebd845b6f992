//! Prelude module for convenient imports.
//!
//! Provides a single `use exterminator::prelude::*;` import that brings in
//! the schema type, both rule builders, and the report types.
//!
//! # Examples
//!
//! ```rust,ignore
//! use exterminator::prelude::*;
//!
//! let schema = Schema::builder()
//!     .field("username", string().required().min(3).max(20))
//!     .field("age", number().required().positive())
//!     .build();
//! ```

// ============================================================================
// FOUNDATION: Messages, rules, reports
// ============================================================================

pub use crate::foundation::{
    KEY_MISMATCH_MESSAGE, KEYS_ENTRY, Message, Rule, RuleOutcome, SchemaError, display_value,
};

// ============================================================================
// RULE BUILDERS
// ============================================================================

pub use crate::rules::{
    EmailOptions, FieldKind, FieldValidator, NULL_MESSAGE, NumberRules, PASSWORD_SPECIAL_CHARS,
    PhoneRegion, StringRules, number, string,
};

// ============================================================================
// SCHEMA
// ============================================================================

pub use crate::schema::{Schema, SchemaBuilder};
