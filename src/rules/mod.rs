//! Fluent rule builders.
//!
//! Two factories cover the supported field types:
//!
//! - [`string()`] for text fields
//! - [`number()`] for numeric fields
//!
//! Each builder method appends a rule (or a preprocessor, or a modifier) and
//! returns the builder by value, so a field's full configuration reads as one
//! chain:
//!
//! ```rust,ignore
//! use exterminator::prelude::*;
//!
//! let schema = Schema::builder()
//!     .field("username", string().required().min(3).max(20).alpha_numeric())
//!     .field("balance", number().required().positive())
//!     .build();
//! ```
//!
//! Rule order is validation order, and no rule short-circuits on failure:
//! every failing rule contributes its message. The only exceptions are the
//! field-level short-circuits (setup errors, `optional`, `nullable`)
//! described in [`FieldValidator::check`].

pub mod field;
pub mod number;
pub mod string;

pub use field::{FieldKind, FieldValidator, NULL_MESSAGE};
pub use number::{NumberRules, number};
pub use string::{EmailOptions, PASSWORD_SPECIAL_CHARS, PhoneRegion, StringRules, string};
