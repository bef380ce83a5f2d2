//! Issue types describing a single validation failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// A required value was absent
    Missing,
    /// A value was present but had the wrong shape
    WrongType,
    /// A length or magnitude was below its minimum
    TooSmall,
    /// A regex or structural decomposition failed
    PatternMismatch,
    /// A refinement rule or strictness violation
    Custom,
}

impl IssueCode {
    /// Returns the snake_case name of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::Missing => "missing",
            IssueCode::WrongType => "wrong_type",
            IssueCode::TooSmall => "too_small",
            IssueCode::PatternMismatch => "pattern_mismatch",
            IssueCode::Custom => "custom",
        }
    }

    /// Returns true for codes that leave a field structurally unusable.
    ///
    /// Refinement rules only run when no fatal issue was collected.
    pub fn is_fatal(&self) -> bool {
        matches!(self, IssueCode::Missing | IssueCode::WrongType)
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One step of an issue path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl PathSegment {
    /// Returns the key if this segment is an object key.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(key) => Some(key),
            PathSegment::Index(_) => None,
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "{key}"),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A single recorded validation failure.
///
/// Issues are immutable once created. The `input` is the original offending
/// value, or `None` when the value was absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Location of the offending value, outermost segment first
    pub path: Vec<PathSegment>,
    /// Failure category
    pub code: IssueCode,
    /// Resolved human-readable message
    pub message: String,
    /// The offending value (absent when `None`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Value>,
    /// The expected shape, e.g. `"string"` or `"email"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// The violated lower bound of a `too_small` issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
}

impl Issue {
    /// Creates an issue with an empty message; callers resolve the message afterwards.
    pub(crate) fn new(path: Vec<PathSegment>, code: IssueCode, input: Option<&Value>) -> Self {
        Self {
            path,
            code,
            message: String::new(),
            input: input.cloned(),
            expected: None,
            minimum: None,
        }
    }

    pub(crate) fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub(crate) fn with_minimum(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub(crate) fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns the JSON type name of the offending input (`"undefined"` when absent).
    pub fn received(&self) -> &'static str {
        type_name(self.input.as_ref())
    }

    /// Returns the top-level field this issue belongs to, if any.
    pub fn field(&self) -> Option<&str> {
        self.path.first().and_then(PathSegment::as_key)
    }
}

/// Returns the JSON type name of a possibly absent value.
pub fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
