//! The field validator core shared by both rule builders.
//!
//! A [`FieldValidator`] is a configured rule-set bound to one schema field:
//! its ordered rules, ordered preprocessors, and the `optional` / `nullable`
//! modifiers. Both [`StringRules`](crate::rules::StringRules) and
//! [`NumberRules`](crate::rules::NumberRules) convert into this type when a
//! schema is built.

use serde_json::{Map, Value};

use crate::foundation::{Message, Preprocessor, Rule};

/// Message reported for a null value on a non-nullable field.
pub const NULL_MESSAGE: &str = "Value cannot be null";

/// Discriminates the two builder variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Built by [`string()`](crate::rules::string); base-type check expects a
    /// JSON string.
    Text,
    /// Built by [`number()`](crate::rules::number); base-type check expects a
    /// JSON number.
    Numeric,
}

/// A configured rule-set for one schema field.
///
/// Checking is a pure function of `(value, whole_object)`; the validator
/// holds configuration only, so one instance can validate any number of
/// values in sequence without carry-over.
pub struct FieldValidator {
    kind: FieldKind,
    rules: Vec<Rule>,
    preprocessors: Vec<Preprocessor>,
    optional: bool,
    nullable: bool,
    invalid_setup: Option<String>,
}

impl std::fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldValidator")
            .field("kind", &self.kind)
            .field("rules", &self.rules)
            .field("preprocessors", &format_args!("<{} functions>", self.preprocessors.len()))
            .field("optional", &self.optional)
            .field("nullable", &self.nullable)
            .field("invalid_setup", &self.invalid_setup)
            .finish()
    }
}

impl FieldValidator {
    pub(crate) fn new(kind: FieldKind, base_rule: Rule) -> Self {
        Self {
            kind,
            rules: vec![base_rule],
            preprocessors: Vec::new(),
            optional: false,
            nullable: false,
            invalid_setup: None,
        }
    }

    /// Returns which builder variant produced this validator.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns the deferred setup error, if a builder call received
    /// contradictory configuration.
    #[must_use]
    pub fn invalid_setup(&self) -> Option<&str> {
        self.invalid_setup.as_deref()
    }

    pub(crate) fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub(crate) fn push_preprocessor(&mut self, preprocessor: Preprocessor) {
        self.preprocessors.push(preprocessor);
    }

    pub(crate) fn set_optional(&mut self) {
        self.optional = true;
    }

    pub(crate) fn set_nullable(&mut self) {
        self.nullable = true;
    }

    /// Records a setup error. The first one wins; once set, `check` reports
    /// it as the sole error on every call.
    pub(crate) fn set_invalid_setup(&mut self, message: String) {
        if self.invalid_setup.is_none() {
            self.invalid_setup = Some(message);
        }
    }

    /// Overrides the message of the most recently added rule.
    pub(crate) fn set_last_message(&mut self, message: Message) {
        if let Some(rule) = self.rules.last_mut() {
            rule.set_message(message);
        }
    }

    /// Validates one value against this field's rules.
    ///
    /// The protocol, in order:
    ///
    /// 1. A deferred setup error is the sole result, always.
    /// 2. `optional` and the value is the empty string: success, every rule
    ///    skipped (including the base-type check).
    /// 3. Null: success iff `nullable`, else the sole error [`NULL_MESSAGE`].
    /// 4. Preprocessors thread the value forward in registration order.
    /// 5. Every rule runs in registration order against the processed value
    ///    and the raw object. No short-circuit on failure; every failing
    ///    rule's message is collected.
    ///
    /// An empty returned list means the value is valid.
    #[must_use]
    pub fn check(&self, value: &Value, object: &Map<String, Value>) -> Vec<String> {
        if let Some(message) = &self.invalid_setup {
            return vec![message.clone()];
        }

        if self.optional && value.as_str() == Some("") {
            return Vec::new();
        }

        if value.is_null() {
            return if self.nullable {
                Vec::new()
            } else {
                vec![NULL_MESSAGE.to_string()]
            };
        }

        let processed = self
            .preprocessors
            .iter()
            .fold(value.clone(), |current, preprocess| preprocess(current));

        self.rules
            .iter()
            .filter_map(|rule| rule.run(&processed, object))
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
