//! Formatted-string checkers: email and E.164 phone numbers.

use super::{require, Check, CheckOutcome};
use crate::core::{CheckContext, IssueCode, Messages};
use crate::prelude::*;
use regex::Regex;
use serde_json::Value;

/// Built-in format patterns.
pub mod patterns {
    use once_cell::sync::Lazy;
    use regex::Regex;

    /// The email pattern browsers use for `<input type="email">`.
    pub const HTML5_EMAIL: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

    /// `+` followed by 1 to 15 digits, no leading zero.
    pub const E164: &str = r"^\+[1-9]\d{0,14}$";

    pub(crate) static HTML5_EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
        // Compile-time constant, covered by tests
        #[allow(clippy::expect_used)]
        Regex::new(HTML5_EMAIL).expect("Hard-coded regex pattern should be valid")
    });

    pub(crate) static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
        #[allow(clippy::expect_used)]
        Regex::new(E164).expect("Hard-coded regex pattern should be valid")
    });
}

/// Supported string formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// HTML5 email address
    Email,
    /// International phone number in E.164 form
    E164Phone,
}

impl FormatType {
    /// Returns the name used as the issue's `expected` value.
    pub fn name(&self) -> &'static str {
        match self {
            FormatType::Email => "email",
            FormatType::E164Phone => "e164",
        }
    }

    fn builtin(&self) -> &'static Regex {
        match self {
            FormatType::Email => &patterns::HTML5_EMAIL_REGEX,
            FormatType::E164Phone => &patterns::E164_REGEX,
        }
    }
}

/// Validates strings against a format pattern.
///
/// # Examples
///
/// ```rust
/// use shape_guard::checkers::{self, Check};
/// use shape_guard::core::{CheckContext, IssueCode};
/// use serde_json::json;
///
/// let phone = checkers::e164();
/// let ctx = CheckContext::root();
/// assert!(phone.check(Some(&json!("+14155552671")), &ctx).is_ok());
///
/// let issues = phone.check(Some(&json!("+0123")), &ctx).unwrap_err();
/// assert_eq!(issues[0].code, IssueCode::PatternMismatch);
/// ```
#[derive(Debug, Clone)]
pub struct FormatChecker {
    format: FormatType,
    pattern: Option<Regex>,
    messages: Messages,
}

impl FormatChecker {
    /// Creates a checker using the format's built-in pattern.
    pub fn new(format: FormatType) -> Self {
        Self {
            format,
            pattern: None,
            messages: Messages::default(),
        }
    }

    /// Replaces the built-in pattern.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| GuardError::invalid_pattern(pattern, e))?;
        self.pattern = Some(regex);
        Ok(self)
    }

    /// Sets the message table.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Returns the format being checked.
    pub fn format(&self) -> FormatType {
        self.format
    }

    fn regex(&self) -> &Regex {
        self.pattern.as_ref().unwrap_or_else(|| self.format.builtin())
    }
}

impl Check for FormatChecker {
    fn check(&self, input: Option<&Value>, ctx: &CheckContext) -> CheckOutcome {
        let value = require(input, ctx, "string", &self.messages)?;
        let Some(text) = value.as_str() else {
            return Err(vec![ctx.issue(
                IssueCode::WrongType,
                input,
                "string",
                &self.messages,
            )]);
        };

        if self.regex().is_match(text) {
            Ok(value.clone())
        } else {
            Err(vec![ctx.issue(
                IssueCode::PatternMismatch,
                input,
                self.format.name(),
                &self.messages,
            )])
        }
    }

    fn kind(&self) -> &'static str {
        self.format.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builtin_patterns_compile() {
        assert!(patterns::HTML5_EMAIL_REGEX.is_match("a@b.co"));
        assert!(patterns::E164_REGEX.is_match("+1"));
    }

    #[test]
    fn test_email() {
        let checker = FormatChecker::new(FormatType::Email);
        let ctx = CheckContext::root().child("email");
        for ok in ["john@example.com", "first.last+tag@sub.example.org", "a@localhost"] {
            assert!(checker.check(Some(&json!(ok)), &ctx).is_ok(), "{ok}");
        }
        for bad in ["john", "john@", "@example.com", "john@-example.com", "a b@c.d"] {
            let issues = checker.check(Some(&json!(bad)), &ctx).unwrap_err();
            assert_eq!(issues[0].code, IssueCode::PatternMismatch, "{bad}");
            assert_eq!(issues[0].message, "Invalid email address");
            assert_eq!(issues[0].expected.as_deref(), Some("email"));
        }
    }

    #[test]
    fn test_e164() {
        let checker = FormatChecker::new(FormatType::E164Phone);
        let ctx = CheckContext::root();
        assert!(checker.check(Some(&json!("+442071838750")), &ctx).is_ok());
        assert!(checker.check(Some(&json!("+123456789012345")), &ctx).is_ok());

        for bad in ["+0123", "442071838750", "+1234567890123456", "+44 20", "+"] {
            let issues = checker.check(Some(&json!(bad)), &ctx).unwrap_err();
            assert_eq!(issues[0].code, IssueCode::PatternMismatch, "{bad}");
            assert_eq!(issues[0].message, "Invalid E.164 number");
        }
    }

    #[test]
    fn test_non_string_is_wrong_type() {
        let issues = FormatChecker::new(FormatType::E164Phone)
            .check(Some(&json!(4420)), &CheckContext::root())
            .unwrap_err();
        assert_eq!(issues[0].code, IssueCode::WrongType);
    }

    #[test]
    fn test_custom_pattern() {
        let checker = FormatChecker::new(FormatType::Email)
            .with_pattern(r"^[a-z]+@example\.com$")
            .unwrap();
        let ctx = CheckContext::root();
        assert!(checker.check(Some(&json!("ada@example.com")), &ctx).is_ok());
        assert!(checker.check(Some(&json!("ada@other.com")), &ctx).is_err());

        assert!(matches!(
            FormatChecker::new(FormatType::Email).with_pattern("[").unwrap_err(),
            GuardError::InvalidPattern { .. }
        ));
    }
}
