//! Message resolution for validation issues.
//!
//! Every checker carries a [`Messages`] table keyed by [`IssueCode`]. When a
//! checker emits an issue, the table entry for that code wins; otherwise the
//! schema-level [`MessageHook`] produces the text. The default hook renders
//! English messages.
//!
//! ```rust
//! use shape_guard::core::{IssueCode, Messages};
//!
//! let messages = Messages::new()
//!     .missing("firstName is missing")
//!     .wrong_type("firstName isn't a string")
//!     .too_small_with(|issue| {
//!         format!("firstName has less than {} characters", issue.minimum.unwrap_or(1.0))
//!     });
//! assert!(messages.has(IssueCode::Missing));
//! ```

use super::issue::{Issue, IssueCode, PathSegment};

/// A schema-wide fallback that renders a message for any issue.
pub type MessageHook = fn(&Issue) -> String;

/// A single message entry: fixed text or a pure function of the issue.
#[derive(Debug, Clone)]
pub enum Message {
    Text(String),
    Resolve(fn(&Issue) -> String),
}

impl Message {
    fn render(&self, issue: &Issue) -> String {
        match self {
            Message::Text(text) => text.clone(),
            Message::Resolve(resolve) => resolve(issue),
        }
    }
}

/// Code-keyed message table for one checker or field.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    missing: Option<Message>,
    wrong_type: Option<Message>,
    too_small: Option<Message>,
    pattern_mismatch: Option<Message>,
    custom: Option<Message>,
}

impl Messages {
    /// Creates an empty table; every code falls back to the schema hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the same text for every code.
    pub fn all(text: impl Into<String>) -> Self {
        let text = text.into();
        let entry = || Some(Message::Text(text.clone()));
        Self {
            missing: entry(),
            wrong_type: entry(),
            too_small: entry(),
            pattern_mismatch: entry(),
            custom: entry(),
        }
    }

    /// Uses the same function for every code.
    pub fn all_with(resolve: fn(&Issue) -> String) -> Self {
        let entry = || Some(Message::Resolve(resolve));
        Self {
            missing: entry(),
            wrong_type: entry(),
            too_small: entry(),
            pattern_mismatch: entry(),
            custom: entry(),
        }
    }

    pub fn missing(mut self, text: impl Into<String>) -> Self {
        self.missing = Some(Message::Text(text.into()));
        self
    }

    pub fn wrong_type(mut self, text: impl Into<String>) -> Self {
        self.wrong_type = Some(Message::Text(text.into()));
        self
    }

    pub fn wrong_type_with(mut self, resolve: fn(&Issue) -> String) -> Self {
        self.wrong_type = Some(Message::Resolve(resolve));
        self
    }

    pub fn too_small(mut self, text: impl Into<String>) -> Self {
        self.too_small = Some(Message::Text(text.into()));
        self
    }

    pub fn too_small_with(mut self, resolve: fn(&Issue) -> String) -> Self {
        self.too_small = Some(Message::Resolve(resolve));
        self
    }

    pub fn pattern_mismatch(mut self, text: impl Into<String>) -> Self {
        self.pattern_mismatch = Some(Message::Text(text.into()));
        self
    }

    pub fn custom(mut self, text: impl Into<String>) -> Self {
        self.custom = Some(Message::Text(text.into()));
        self
    }

    /// Returns true if the table has an entry for `code`.
    pub fn has(&self, code: IssueCode) -> bool {
        self.slot(code).is_some()
    }

    /// Fills every empty entry of `self` from `other`.
    pub fn or(mut self, other: &Messages) -> Self {
        for code in [
            IssueCode::Missing,
            IssueCode::WrongType,
            IssueCode::TooSmall,
            IssueCode::PatternMismatch,
            IssueCode::Custom,
        ] {
            if self.slot(code).is_none() {
                *self.slot_mut(code) = other.slot(code).cloned();
            }
        }
        self
    }

    /// Renders the message for an issue, if this table has an entry for its code.
    pub fn resolve(&self, issue: &Issue) -> Option<String> {
        self.slot(issue.code).map(|message| message.render(issue))
    }

    fn slot(&self, code: IssueCode) -> Option<&Message> {
        match code {
            IssueCode::Missing => self.missing.as_ref(),
            IssueCode::WrongType => self.wrong_type.as_ref(),
            IssueCode::TooSmall => self.too_small.as_ref(),
            IssueCode::PatternMismatch => self.pattern_mismatch.as_ref(),
            IssueCode::Custom => self.custom.as_ref(),
        }
    }

    fn slot_mut(&mut self, code: IssueCode) -> &mut Option<Message> {
        match code {
            IssueCode::Missing => &mut self.missing,
            IssueCode::WrongType => &mut self.wrong_type,
            IssueCode::TooSmall => &mut self.too_small,
            IssueCode::PatternMismatch => &mut self.pattern_mismatch,
            IssueCode::Custom => &mut self.custom,
        }
    }
}

/// The built-in English message hook.
pub fn default_message(issue: &Issue) -> String {
    let expected = issue.expected.as_deref().unwrap_or("value");
    match issue.code {
        IssueCode::Missing | IssueCode::WrongType => {
            format!(
                "Invalid input: expected {expected}, received {}",
                issue.received()
            )
        }
        IssueCode::TooSmall => {
            let minimum = format_number(issue.minimum.unwrap_or(0.0));
            match expected {
                "string" => format!("Too small: expected string to have >={minimum} characters"),
                "array" => format!("Too small: expected array to have >={minimum} items"),
                "positive number" => format!("Too small: expected number to be >{minimum}"),
                _ => format!("Too small: expected {expected} to be >={minimum}"),
            }
        }
        IssueCode::PatternMismatch => match expected {
            "email" => "Invalid email address".to_string(),
            "e164" => "Invalid E.164 number".to_string(),
            _ => "Invalid string: must match pattern".to_string(),
        },
        IssueCode::Custom => match (expected, issue.path.last()) {
            ("declared key", Some(PathSegment::Key(key))) => format!("Unrecognized key: \"{key}\""),
            _ => "Invalid input".to_string(),
        },
    }
}

/// Formats a bound without a trailing `.0` for whole numbers.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
