//! Fluent rule builder for numeric fields.
//!
//! Created by [`number()`]; mirrors [`StringRules`](crate::rules::StringRules)
//! with numeric checks and the cross-field comparisons:
//!
//! ```rust,ignore
//! use exterminator::prelude::*;
//!
//! let balance = number().required().positive();
//! let withdrawal = number().required().less_equal("balance");
//! ```
//!
//! The base-type check ("Value must be a number") is implicitly the first
//! rule of every builder.

use serde_json::Value;

use crate::foundation::{Message, Rule, RuleOutcome};
use crate::rules::field::{FieldKind, FieldValidator};

/// How a cross-field numeric comparison relates this field to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Comparison {
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
}

impl Comparison {
    fn holds(self, left: f64, right: f64) -> bool {
        match self {
            Self::Greater => left > right,
            Self::Less => left < right,
            Self::GreaterEqual => left >= right,
            Self::LessEqual => left <= right,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Greater => "greater than",
            Self::Less => "less than",
            Self::GreaterEqual => "greater than or equal to",
            Self::LessEqual => "less than or equal to",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Greater => "greater",
            Self::Less => "less",
            Self::GreaterEqual => "greater_equal",
            Self::LessEqual => "less_equal",
        }
    }
}

/// Creates a numeric-field rule builder.
#[must_use]
pub fn number() -> NumberRules {
    NumberRules::new()
}

/// Fluent rule builder for numeric fields. See the [module docs](self).
#[derive(Debug)]
pub struct NumberRules {
    inner: FieldValidator,
}

impl NumberRules {
    fn new() -> Self {
        let base = Rule::new("number_type", "Value must be a number", |value, _| {
            RuleOutcome::from_bool(value.is_number())
        });
        Self {
            inner: FieldValidator::new(FieldKind::Numeric, base),
        }
    }

    fn rule(mut self, rule: Rule) -> Self {
        self.inner.push_rule(rule);
        self
    }

    fn comparison(self, comparison: Comparison, field: String) -> Self {
        let message = format!("Value must be {} {field}", comparison.describe());
        self.rule(Rule::new(comparison.name(), message, move |value, object| {
            let left = value.as_f64();
            let right = object.get(&field).and_then(Value::as_f64);
            match (left, right) {
                (Some(left), Some(right)) => RuleOutcome::from_bool(comparison.holds(left, right)),
                _ => RuleOutcome::Fail,
            }
        }))
    }

    /// Fails on the empty string. Never fails on `0`.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(self) -> Self {
        self.rule(Rule::new("required", "Value is required", |value, _| {
            match value {
                Value::String(s) if s.is_empty() => RuleOutcome::Fail,
                _ => RuleOutcome::Pass,
            }
        }))
    }

    /// Fails when the value has a fractional part.
    #[must_use = "builder methods must be chained or built"]
    pub fn integer(self) -> Self {
        self.rule(Rule::new(
            "integer",
            "Value must be an integer",
            |value, _| match value.as_f64() {
                Some(n) => RuleOutcome::from_bool(n.fract() == 0.0),
                None => RuleOutcome::Fail,
            },
        ))
    }

    /// Fails unless the value is strictly greater than zero.
    #[must_use = "builder methods must be chained or built"]
    pub fn positive(self) -> Self {
        self.rule(Rule::new(
            "positive",
            "Value must be positive",
            |value, _| match value.as_f64() {
                Some(n) => RuleOutcome::from_bool(n > 0.0),
                None => RuleOutcome::Fail,
            },
        ))
    }

    /// Fails unless the value is strictly less than zero.
    #[must_use = "builder methods must be chained or built"]
    pub fn negative(self) -> Self {
        self.rule(Rule::new(
            "negative",
            "Value must be negative",
            |value, _| match value.as_f64() {
                Some(n) => RuleOutcome::from_bool(n < 0.0),
                None => RuleOutcome::Fail,
            },
        ))
    }

    /// Cross-field rule: fails unless this value is strictly greater than the
    /// named field's value.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater(self, field: impl Into<String>) -> Self {
        self.comparison(Comparison::Greater, field.into())
    }

    /// Cross-field rule: fails unless this value is strictly less than the
    /// named field's value.
    #[must_use = "builder methods must be chained or built"]
    pub fn less(self, field: impl Into<String>) -> Self {
        self.comparison(Comparison::Less, field.into())
    }

    /// Cross-field rule: fails unless this value is at least the named
    /// field's value.
    #[must_use = "builder methods must be chained or built"]
    pub fn greater_equal(self, field: impl Into<String>) -> Self {
        self.comparison(Comparison::GreaterEqual, field.into())
    }

    /// Cross-field rule: fails unless this value is at most the named field's
    /// value.
    #[must_use = "builder methods must be chained or built"]
    pub fn less_equal(self, field: impl Into<String>) -> Self {
        self.comparison(Comparison::LessEqual, field.into())
    }

    /// Cross-field rule: fails unless this field's value equals the raw value
    /// of `field` in the object being validated.
    ///
    /// Numbers compare by value, so `100` equals `100.0`.
    #[must_use = "builder methods must be chained or built"]
    pub fn equals(self, field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("Value must equal field '{field}'");
        self.rule(Rule::new("equals", message, move |value, object| {
            let Some(other) = object.get(&field) else {
                return RuleOutcome::Fail;
            };
            let equal = match (value.as_f64(), other.as_f64()) {
                (Some(left), Some(right)) => left == right,
                _ => value == other,
            };
            RuleOutcome::from_bool(equal)
        }))
    }

    /// Marks the field optional: the empty string short-circuits every rule
    /// (including the base-type check) to success.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.inner.set_optional();
        self
    }

    /// Marks the field nullable: a literal null short-circuits to success.
    #[must_use = "builder methods must be chained or built"]
    pub fn nullable(mut self) -> Self {
        self.inner.set_nullable();
        self
    }

    /// Overrides the message of the most recently added rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<Message>) -> Self {
        self.inner.set_last_message(message.into());
        self
    }

    /// Overrides the message of the most recently added rule with a function
    /// of the offending value.
    #[must_use = "builder methods must be chained or built"]
    pub fn message_with<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        self.inner.set_last_message(Message::with(f));
        self
    }
}

impl Default for NumberRules {
    fn default() -> Self {
        Self::new()
    }
}

impl From<NumberRules> for FieldValidator {
    fn from(rules: NumberRules) -> Self {
        rules.inner
    }
}

// ============================================================================
// TESTS
// ============================================================================
