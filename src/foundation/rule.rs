//! Single named checks and value preprocessors.
//!
//! A [`Rule`] is one pass/fail check with an associated [`Message`]. Checks
//! receive both the (preprocessed) field value and a read-only view of the
//! whole object being validated, which is how cross-field rules such as
//! `equals` and the numeric comparisons reach their target field.
//!
//! A check reports a [`RuleOutcome`] rather than a bare boolean: most rules
//! answer `Pass` or `Fail` (use the rule's message), but a rule that distinguishes
//! several failure modes internally (the email rule's format, allow-list, and
//! deny-list branches) answers `FailWith` carrying the specific message.

use serde_json::{Map, Value};

use crate::foundation::Message;

// ============================================================================
// RULE OUTCOME
// ============================================================================

/// Result of running a single rule check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The value satisfies the rule.
    Pass,
    /// The value fails the rule; report the rule's own message.
    Fail,
    /// The value fails the rule with a message chosen by the check itself.
    /// Overrides the rule's configured message.
    FailWith(String),
}

impl RuleOutcome {
    /// Convenience constructor: `Pass` when the condition holds, else `Fail`.
    #[must_use]
    pub fn from_bool(ok: bool) -> Self {
        if ok { Self::Pass } else { Self::Fail }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// Boxed check function shared by all rules.
pub type Check = Box<dyn Fn(&Value, &Map<String, Value>) -> RuleOutcome + Send + Sync>;

/// A single named check with an associated error message.
pub struct Rule {
    name: &'static str,
    check: Check,
    message: Message,
}

impl Rule {
    /// Creates a rule from a name, default message, and check function.
    pub fn new<F>(name: &'static str, message: impl Into<Message>, check: F) -> Self
    where
        F: Fn(&Value, &Map<String, Value>) -> RuleOutcome + Send + Sync + 'static,
    {
        Self {
            name,
            check: Box::new(check),
            message: message.into(),
        }
    }

    /// Returns the rule's name (e.g. `"min"`, `"email"`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Replaces the rule's message. Used by the builders' `message` /
    /// `message_with` methods to customize the most recently added rule.
    pub fn set_message(&mut self, message: Message) {
        self.message = message;
    }

    /// Runs the rule, resolving the error message on failure.
    ///
    /// Returns `None` when the value passes.
    #[must_use]
    pub fn run(&self, value: &Value, object: &Map<String, Value>) -> Option<String> {
        match (self.check)(value, object) {
            RuleOutcome::Pass => None,
            RuleOutcome::Fail => Some(self.message.resolve(value)),
            RuleOutcome::FailWith(message) => Some(message),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("check", &"<function>")
            .field("message", &self.message)
            .finish()
    }
}

// ============================================================================
// PREPROCESSOR
// ============================================================================

/// A pure value transform applied before any rule runs.
///
/// Preprocessors thread the field value forward in registration order;
/// cross-field rules still read the *raw* object, never preprocessed values.
pub type Preprocessor = Box<dyn Fn(Value) -> Value + Send + Sync>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty_object() -> Map<String, Value> {
        Map::new()
    }

    #[test]
    fn passing_rule_reports_nothing() {
        let rule = Rule::new("always_ok", "never shown", |_, _| RuleOutcome::Pass);
        assert_eq!(rule.run(&json!("x"), &empty_object()), None);
    }

    #[test]
    fn failing_rule_reports_its_message() {
        let rule = Rule::new("always_bad", "static message", |_, _| RuleOutcome::Fail);
        assert_eq!(
            rule.run(&json!("x"), &empty_object()),
            Some("static message".to_string())
        );
    }

    #[test]
    fn fail_with_overrides_the_configured_message() {
        let rule = Rule::new("branchy", "default", |_, _| {
            RuleOutcome::FailWith("specific".to_string())
        });
        assert_eq!(
            rule.run(&json!("x"), &empty_object()),
            Some("specific".to_string())
        );
    }

    #[test]
    fn set_message_replaces_the_default() {
        let mut rule = Rule::new("always_bad", "old", |_, _| RuleOutcome::Fail);
        rule.set_message(Message::from("new"));
        assert_eq!(
            rule.run(&json!("x"), &empty_object()),
            Some("new".to_string())
        );
    }

    #[test]
    fn cross_field_check_sees_the_object() {
        let rule = Rule::new("matches_other", "mismatch", |value, object| {
            RuleOutcome::from_bool(object.get("other") == Some(value))
        });

        let mut object = Map::new();
        object.insert("other".to_string(), json!("x"));
        assert_eq!(rule.run(&json!("x"), &object), None);
        assert!(rule.run(&json!("y"), &object).is_some());
    }

    #[test]
    fn from_bool_maps_to_pass_and_fail() {
        assert_eq!(RuleOutcome::from_bool(true), RuleOutcome::Pass);
        assert_eq!(RuleOutcome::from_bool(false), RuleOutcome::Fail);
    }
}
