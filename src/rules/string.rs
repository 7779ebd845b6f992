//! Fluent rule builder for text fields.
//!
//! Created by [`string()`]; every rule method appends a check and returns the
//! builder, so rules run in exactly the order they were declared:
//!
//! ```rust,ignore
//! use exterminator::prelude::*;
//!
//! let username = string().required().min(3).max(20).alpha_numeric();
//! let email = string().trim().email(EmailOptions::default().allow(["example.com"]));
//! ```
//!
//! The base-type check ("Value must be a string") is implicitly the first
//! rule of every builder.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::foundation::{Message, Rule, RuleOutcome, display_value};
use crate::rules::field::{FieldKind, FieldValidator};

// ============================================================================
// BUILT-IN PATTERNS
// ============================================================================

static ALPHA_NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("alphanumeric pattern"));

// Deliberately simple: one local part, one '@', one dotted domain. Domain
// allow/deny lists handle anything stricter.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_US_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+1[-. ]?)?(\(\d{3}\)|\d{3})[-. ]?\d{3}[-. ]?\d{4}$")
        .expect("us phone pattern")
});

static PHONE_EU_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+\d{2,3}([-. ]?\d{1,6}){2,6}$").expect("eu phone pattern")
});

/// Special characters accepted by the default password policy.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>/?";

/// Region presets for the [`phone`](StringRules::phone) rule.
///
/// Unsupported regions are unrepresentable: the source of a phone pattern is
/// either one of these presets or a caller-compiled [`Regex`] passed to
/// [`phone_pattern`](StringRules::phone_pattern).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRegion {
    /// North American numbering plan, optional `+1` country code.
    Us,
    /// European numbers in international form (`+` and country code).
    Eu,
}

impl PhoneRegion {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Us => &PHONE_US_RE,
            Self::Eu => &PHONE_EU_RE,
        }
    }
}

// ============================================================================
// EMAIL OPTIONS
// ============================================================================

/// Domain allow/deny configuration for the [`email`](StringRules::email) rule.
///
/// # Examples
///
/// ```rust,ignore
/// use exterminator::rules::EmailOptions;
///
/// let opts = EmailOptions::default()
///     .allow(["example.com", "example.org"])
///     .deny(["mailinator.com"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmailOptions {
    /// When non-empty, the email's domain must appear in this list.
    pub domains: Vec<String>,
    /// Domains rejected even when the format is valid.
    pub exclude_domains: Vec<String>,
}

impl EmailOptions {
    /// Adds domains to the allow-list.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains.extend(domains.into_iter().map(Into::into));
        self
    }

    /// Adds domains to the deny-list.
    #[must_use = "builder methods must be chained or built"]
    pub fn deny<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_domains
            .extend(domains.into_iter().map(Into::into));
        self
    }

    /// Returns the first domain present in both lists, if any.
    fn conflict(&self) -> Option<&str> {
        self.domains
            .iter()
            .find(|d| {
                self.exclude_domains
                    .iter()
                    .any(|e| e.eq_ignore_ascii_case(d.as_str()))
            })
            .map(String::as_str)
    }
}

// ============================================================================
// STRING RULES BUILDER
// ============================================================================

/// Creates a text-field rule builder.
#[must_use]
pub fn string() -> StringRules {
    StringRules::new()
}

/// Fluent rule builder for text fields. See the [module docs](self).
#[derive(Debug)]
pub struct StringRules {
    inner: FieldValidator,
}

impl StringRules {
    fn new() -> Self {
        let base = Rule::new("string_type", "Value must be a string", |value, _| {
            RuleOutcome::from_bool(value.is_string())
        });
        Self {
            inner: FieldValidator::new(FieldKind::Text, base),
        }
    }

    fn rule(mut self, rule: Rule) -> Self {
        self.inner.push_rule(rule);
        self
    }

    /// Fails when the value trims to the empty string.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(self) -> Self {
        self.rule(Rule::new("required", "Value is required", |value, _| {
            match value.as_str() {
                Some(s) if s.trim().is_empty() => RuleOutcome::Fail,
                _ => RuleOutcome::Pass,
            }
        }))
    }

    /// Fails when the value is shorter than `len` characters.
    ///
    /// The default message interpolates the offending value and the bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, len: usize) -> Self {
        let message = Message::with(move |value| {
            format!(
                "'{}' must be at least {len} characters long",
                display_value(value)
            )
        });
        self.rule(Rule::new("min", message, move |value, _| {
            match value.as_str() {
                Some(s) => RuleOutcome::from_bool(s.chars().count() >= len),
                None => RuleOutcome::Fail,
            }
        }))
    }

    /// Fails when the value is longer than `len` characters.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, len: usize) -> Self {
        let message = Message::with(move |value| {
            format!(
                "'{}' must be at most {len} characters long",
                display_value(value)
            )
        });
        self.rule(Rule::new("max", message, move |value, _| {
            match value.as_str() {
                Some(s) => RuleOutcome::from_bool(s.chars().count() <= len),
                None => RuleOutcome::Fail,
            }
        }))
    }

    /// Fails when the value contains anything but ASCII letters and digits.
    #[must_use = "builder methods must be chained or built"]
    pub fn alpha_numeric(self) -> Self {
        self.rule(Rule::new(
            "alpha_numeric",
            "Value must contain only letters and digits",
            |value, _| match value.as_str() {
                Some(s) => RuleOutcome::from_bool(ALPHA_NUMERIC_RE.is_match(s)),
                None => RuleOutcome::Fail,
            },
        ))
    }

    /// Fails when the value differs from its lowercase form.
    #[must_use = "builder methods must be chained or built"]
    pub fn lowercase(self) -> Self {
        self.rule(Rule::new(
            "lowercase",
            "Value must be lowercase",
            |value, _| match value.as_str() {
                Some(s) => RuleOutcome::from_bool(s == s.to_lowercase()),
                None => RuleOutcome::Fail,
            },
        ))
    }

    /// Fails when the value differs from its uppercase form.
    #[must_use = "builder methods must be chained or built"]
    pub fn uppercase(self) -> Self {
        self.rule(Rule::new(
            "uppercase",
            "Value must be uppercase",
            |value, _| match value.as_str() {
                Some(s) => RuleOutcome::from_bool(s == s.to_uppercase()),
                None => RuleOutcome::Fail,
            },
        ))
    }

    /// Email rule: format first, then domain allow-list, then deny-list.
    ///
    /// The three branches short-circuit inside the single rule and each
    /// reports its own message. A domain present on both lists is a deferred
    /// setup error: every later `check` call for this field reports only that
    /// error, regardless of the value or the other rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn email(mut self, options: EmailOptions) -> Self {
        if let Some(domain) = options.conflict() {
            self.inner.set_invalid_setup(format!(
                "Email domain '{domain}' cannot be both allowed and excluded"
            ));
            return self;
        }

        let domains: Vec<String> = options.domains.iter().map(|d| d.to_lowercase()).collect();
        let excluded: Vec<String> = options
            .exclude_domains
            .iter()
            .map(|d| d.to_lowercase())
            .collect();

        self.rule(Rule::new(
            "email",
            "Value must be a valid email address",
            move |value, _| {
                let Some(s) = value.as_str() else {
                    return RuleOutcome::Fail;
                };
                if !EMAIL_RE.is_match(s) {
                    return RuleOutcome::Fail;
                }
                // Format guarantees an '@' with a non-empty domain after it.
                let domain = s.rsplit('@').next().unwrap_or_default().to_lowercase();
                if !domains.is_empty() && !domains.contains(&domain) {
                    return RuleOutcome::FailWith(format!(
                        "Email domain '{domain}' is not allowed"
                    ));
                }
                if excluded.contains(&domain) {
                    return RuleOutcome::FailWith(format!("Email domain '{domain}' is excluded"));
                }
                RuleOutcome::Pass
            },
        ))
    }

    /// Phone rule using a region preset.
    #[must_use = "builder methods must be chained or built"]
    pub fn phone(self, region: PhoneRegion) -> Self {
        self.rule(Rule::new(
            "phone",
            "Value must be a valid phone number",
            move |value, _| match value.as_str() {
                Some(s) => RuleOutcome::from_bool(region.pattern().is_match(s)),
                None => RuleOutcome::Fail,
            },
        ))
    }

    /// Phone rule using a caller-compiled pattern instead of a preset.
    #[must_use = "builder methods must be chained or built"]
    pub fn phone_pattern(self, pattern: Regex) -> Self {
        self.rule(Rule::new(
            "phone",
            "Value must be a valid phone number",
            move |value, _| match value.as_str() {
                Some(s) => RuleOutcome::from_bool(pattern.is_match(s)),
                None => RuleOutcome::Fail,
            },
        ))
    }

    /// Default password policy: at least 8 characters with at least one
    /// lowercase letter, one uppercase letter, one digit, and one character
    /// from [`PASSWORD_SPECIAL_CHARS`].
    #[must_use = "builder methods must be chained or built"]
    pub fn password(self) -> Self {
        self.rule(Rule::new(
            "password",
            "Value must be at least 8 characters with lowercase, uppercase, \
             digit, and special characters",
            |value, _| match value.as_str() {
                Some(s) => RuleOutcome::from_bool(
                    s.chars().count() >= 8
                        && s.chars().any(|c| c.is_ascii_lowercase())
                        && s.chars().any(|c| c.is_ascii_uppercase())
                        && s.chars().any(|c| c.is_ascii_digit())
                        && s.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)),
                ),
                None => RuleOutcome::Fail,
            },
        ))
    }

    /// Password rule using a caller-compiled pattern instead of the default
    /// policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn password_pattern(self, pattern: Regex) -> Self {
        self.rule(Rule::new(
            "password",
            "Value does not satisfy the password policy",
            move |value, _| match value.as_str() {
                Some(s) => RuleOutcome::from_bool(pattern.is_match(s)),
                None => RuleOutcome::Fail,
            },
        ))
    }

    /// Fails when the value does not match `pattern`.
    #[must_use = "builder methods must be chained or built"]
    pub fn regex(self, pattern: Regex) -> Self {
        self.rule(Rule::new(
            "regex",
            "Value does not match the required pattern",
            move |value, _| match value.as_str() {
                Some(s) => RuleOutcome::from_bool(pattern.is_match(s)),
                None => RuleOutcome::Fail,
            },
        ))
    }

    /// Fails when the value is not one of `allowed`.
    ///
    /// An empty allowed set is a deferred setup error.
    #[must_use = "builder methods must be chained or built"]
    pub fn one_of<I, S>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        if allowed.is_empty() {
            self.inner
                .set_invalid_setup("one_of requires at least one allowed value".to_string());
            return self;
        }

        let message = format!("Value must be one of: {}", allowed.join(", "));
        self.rule(Rule::new("one_of", message, move |value, _| {
            match value.as_str() {
                Some(s) => RuleOutcome::from_bool(allowed.iter().any(|a| a == s)),
                None => RuleOutcome::Fail,
            }
        }))
    }

    /// Cross-field rule: fails unless this field's value equals the raw value
    /// of `field` in the object being validated.
    #[must_use = "builder methods must be chained or built"]
    pub fn equals(self, field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("Value must equal field '{field}'");
        self.rule(Rule::new("equals", message, move |value, object| {
            RuleOutcome::from_bool(object.get(&field) == Some(value))
        }))
    }

    /// Preprocessor: strips leading and trailing whitespace before any rule
    /// sees the value.
    #[must_use = "builder methods must be chained or built"]
    pub fn trim(mut self) -> Self {
        self.inner.push_preprocessor(Box::new(|value| match value {
            Value::String(s) => Value::String(s.trim().to_string()),
            other => other,
        }));
        self
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

impl Default for StringRules {
    fn default() -> Self {
        Self::new()
    }
}

impl From<StringRules> for FieldValidator {
    fn from(rules: StringRules) -> Self {
        rules.inner
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Map, json};

    fn object() -> Map<String, Value> {
        Map::new()
    }

    fn check(rules: StringRules, value: Value) -> Vec<String> {
        FieldValidator::from(rules).check(&value, &object())
    }

    #[test]
    fn base_type_rejects_non_strings() {
        assert_eq!(
            check(string(), json!(0)),
            vec!["Value must be a string".to_string()]
        );
        assert!(check(string(), json!("anything")).is_empty());
    }

    #[test]
    fn required_rejects_blank_strings() {
        assert!(check(string().required(), json!("x")).is_empty());
        assert_eq!(
            check(string().required(), json!("   ")),
            vec!["Value is required".to_string()]
        );
        assert_eq!(
            check(string().required(), json!("")),
            vec!["Value is required".to_string()]
        );
    }

    #[test]
    fn min_interpolates_value_and_bound() {
        assert_eq!(
            check(string().min(3), json!("ab")),
            vec!["'ab' must be at least 3 characters long".to_string()]
        );
        assert!(check(string().min(3), json!("abc")).is_empty());
    }

    #[test]
    fn min_counts_characters_not_bytes() {
        assert!(check(string().min(3), json!("äöü")).is_empty());
    }

    #[test]
    fn max_rejects_long_values() {
        assert!(check(string().max(3), json!("abc")).is_empty());
        assert_eq!(
            check(string().max(3), json!("abcd")),
            vec!["'abcd' must be at most 3 characters long".to_string()]
        );
    }

    #[test]
    fn alpha_numeric_rule() {
        assert!(check(string().alpha_numeric(), json!("abc123XYZ")).is_empty());
        assert!(!check(string().alpha_numeric(), json!("abc 123")).is_empty());
        assert!(!check(string().alpha_numeric(), json!("abc-123")).is_empty());
    }

    #[test]
    fn case_rules() {
        assert!(check(string().lowercase(), json!("abc1!")).is_empty());
        assert_eq!(
            check(string().lowercase(), json!("Abc")),
            vec!["Value must be lowercase".to_string()]
        );
        assert!(check(string().uppercase(), json!("ABC1!")).is_empty());
        assert_eq!(
            check(string().uppercase(), json!("Abc")),
            vec!["Value must be uppercase".to_string()]
        );
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn format_check() {
            let ok = check(string().email(EmailOptions::default()), json!("a@b.com"));
            assert!(ok.is_empty());
            assert_eq!(
                check(string().email(EmailOptions::default()), json!("not-an-email")),
                vec!["Value must be a valid email address".to_string()]
            );
        }

        #[test]
        fn allow_list() {
            let rules = || string().email(EmailOptions::default().allow(["good.com"]));
            assert!(check(rules(), json!("a@good.com")).is_empty());
            assert_eq!(
                check(rules(), json!("a@bad.com")),
                vec!["Email domain 'bad.com' is not allowed".to_string()]
            );
        }

        #[test]
        fn deny_list() {
            let rules = || string().email(EmailOptions::default().deny(["bad.com"]));
            assert!(check(rules(), json!("a@good.com")).is_empty());
            assert_eq!(
                check(rules(), json!("a@bad.com")),
                vec!["Email domain 'bad.com' is excluded".to_string()]
            );
        }

        #[test]
        fn domain_comparison_is_case_insensitive() {
            let rules = || string().email(EmailOptions::default().allow(["Good.COM"]));
            assert!(check(rules(), json!("a@good.com")).is_empty());
        }

        #[test]
        fn conflicting_lists_are_a_setup_error() {
            let rules = string()
                .email(EmailOptions::default().allow(["a.com"]).deny(["a.com"]))
                .required();
            let validator = FieldValidator::from(rules);

            // Valid or invalid values alike: only the setup error is reported.
            assert_eq!(
                validator.check(&json!("a@a.com"), &object()),
                vec!["Email domain 'a.com' cannot be both allowed and excluded".to_string()]
            );
            assert_eq!(
                validator.check(&json!(""), &object()),
                vec!["Email domain 'a.com' cannot be both allowed and excluded".to_string()]
            );
        }
    }

    mod phone {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn us_preset() {
            assert!(check(string().phone(PhoneRegion::Us), json!("(415) 555-1234")).is_empty());
            assert!(check(string().phone(PhoneRegion::Us), json!("415-555-1234")).is_empty());
            assert!(check(string().phone(PhoneRegion::Us), json!("+1 415 555 1234")).is_empty());
            assert!(check(string().phone(PhoneRegion::Us), json!("4155551234")).is_empty());
            assert_eq!(
                check(string().phone(PhoneRegion::Us), json!("123")),
                vec!["Value must be a valid phone number".to_string()]
            );
        }

        #[test]
        fn eu_preset() {
            assert!(check(string().phone(PhoneRegion::Eu), json!("+49 30 123456")).is_empty());
            assert!(check(string().phone(PhoneRegion::Eu), json!("+33 1 23 45 67 89")).is_empty());
            assert!(!check(string().phone(PhoneRegion::Eu), json!("0301234567")).is_empty());
        }

        #[test]
        fn custom_pattern() {
            let pattern = Regex::new(r"^\d{5}$").unwrap();
            assert!(check(string().phone_pattern(pattern.clone()), json!("12345")).is_empty());
            assert!(!check(string().phone_pattern(pattern), json!("1234")).is_empty());
        }
    }

    mod password {
        use super::*;

        #[test]
        fn default_policy() {
            assert!(check(string().password(), json!("Abcdef1@")).is_empty());
            assert!(!check(string().password(), json!("abcdef1@")).is_empty()); // no uppercase
            assert!(!check(string().password(), json!("ABCDEF1@")).is_empty()); // no lowercase
            assert!(!check(string().password(), json!("Abcdefg@")).is_empty()); // no digit
            assert!(!check(string().password(), json!("Abcdefg1")).is_empty()); // no special
            assert!(!check(string().password(), json!("Ab1@")).is_empty()); // too short
        }

        #[test]
        fn custom_pattern() {
            let pattern = Regex::new(r"^[a-z]{4}$").unwrap();
            assert!(check(string().password_pattern(pattern.clone()), json!("abcd")).is_empty());
            assert!(!check(string().password_pattern(pattern), json!("Abcdef1@")).is_empty());
        }
    }

    #[test]
    fn regex_rule() {
        let pattern = Regex::new(r"^\d+$").unwrap();
        assert!(check(string().regex(pattern.clone()), json!("123")).is_empty());
        assert_eq!(
            check(string().regex(pattern), json!("abc")),
            vec!["Value does not match the required pattern".to_string()]
        );
    }

    mod one_of {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn membership() {
            let rules = || string().one_of(["red", "green"]);
            assert!(check(rules(), json!("red")).is_empty());
            assert_eq!(
                check(rules(), json!("blue")),
                vec!["Value must be one of: red, green".to_string()]
            );
        }

        #[test]
        fn empty_set_is_a_setup_error() {
            let rules = string().one_of(Vec::<String>::new());
            assert_eq!(
                check(rules, json!("anything")),
                vec!["one_of requires at least one allowed value".to_string()]
            );
        }
    }

    #[test]
    fn equals_compares_against_the_raw_object() {
        let mut obj = Map::new();
        obj.insert("pw".to_string(), json!("secret"));

        let validator = FieldValidator::from(string().equals("pw"));
        assert!(validator.check(&json!("secret"), &obj).is_empty());
        assert_eq!(
            validator.check(&json!("other"), &obj),
            vec!["Value must equal field 'pw'".to_string()]
        );
    }

    #[test]
    fn equals_fails_when_target_field_is_absent() {
        let validator = FieldValidator::from(string().equals("missing"));
        assert!(!validator.check(&json!("x"), &object()).is_empty());
    }

    #[test]
    fn trim_runs_before_rules() {
        assert!(check(string().trim().min(3).max(3), json!("  abc  ")).is_empty());
        // Without trim the padded value fails max.
        assert!(!check(string().min(3).max(3), json!("  abc  ")).is_empty());
    }

    #[test]
    fn optional_skips_even_the_base_type_check() {
        assert!(check(string().optional().required().min(5), json!("")).is_empty());
    }

    #[test]
    fn nullable_permits_null() {
        assert!(check(string().nullable().required(), Value::Null).is_empty());
        assert_eq!(
            check(string().required(), Value::Null),
            vec!["Value cannot be null".to_string()]
        );
    }

    #[test]
    fn message_overrides_the_last_rule() {
        assert_eq!(
            check(string().min(5).message("too short"), json!("ab")),
            vec!["too short".to_string()]
        );
        // Earlier rules keep their own messages.
        assert_eq!(
            check(string().required().min(5).message("too short"), json!(" ")),
            vec!["Value is required".to_string(), "too short".to_string()]
        );
    }

    #[test]
    fn message_with_sees_the_value() {
        assert_eq!(
            check(
                string()
                    .min(5)
                    .message_with(|v| format!("{} is unacceptable", display_value(v))),
                json!("ab")
            ),
            vec!["ab is unacceptable".to_string()]
        );
    }

    #[test]
    fn failing_rules_all_report_in_declaration_order() {
        assert_eq!(
            check(string().min(5).alpha_numeric(), json!("a b")),
            vec![
                "'a b' must be at least 5 characters long".to_string(),
                "Value must contain only letters and digits".to_string(),
            ]
        );
    }
}
