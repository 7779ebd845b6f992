//! Error message resolution for rules.
//!
//! Every rule carries a [`Message`] that produces the human-readable string
//! reported when the rule fails. Messages are either static text or a
//! function of the offending value, so default messages can interpolate
//! the value without allocating until a failure actually happens.
//!
//! All static text uses `Cow<'static, str>` for zero-allocation in the
//! common case of compile-time message literals.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

/// The error message attached to a rule.
///
/// # Examples
///
/// ```rust,ignore
/// use exterminator::foundation::Message;
///
/// // Static text, zero allocation until the rule fails:
/// let m = Message::from("Value must be lowercase");
///
/// // Derived from the offending value:
/// let m = Message::with(|v| format!("{v} is not a valid username"));
/// ```
pub enum Message {
    /// Fixed text, resolved as-is.
    Text(Cow<'static, str>),
    /// Computed from the offending value at failure time.
    Lazy(Box<dyn Fn(&Value) -> String + Send + Sync>),
}

impl Message {
    /// Creates a message computed from the offending value.
    pub fn with<F>(f: F) -> Self
    where
        F: Fn(&Value) -> String + Send + Sync + 'static,
    {
        Self::Lazy(Box::new(f))
    }

    /// Resolves the message against the value that failed the rule.
    #[must_use]
    pub fn resolve(&self, value: &Value) -> String {
        match self {
            Self::Text(text) => text.to_string(),
            Self::Lazy(f) => f(value),
        }
    }
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for Message {
    fn from(text: Cow<'static, str>) -> Self {
        Self::Text(text)
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Lazy(_) => f.debug_tuple("Lazy").field(&"<function>").finish(),
        }
    }
}

/// Renders a JSON value for interpolation into error messages.
///
/// Strings render without surrounding quotes; everything else uses the
/// compact JSON form.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
