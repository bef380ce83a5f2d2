//! Type checkers for individual values.
//!
//! A checker validates one value against one declared shape and returns the
//! normalized value or the issues it found, never both. Checkers are pure:
//! the same input always yields the same outcome.
//!
//! ## Available checkers
//!
//! - [`string`]: JSON strings, with `non_empty`, `min_len` and `regex`
//! - [`number`]: JSON numbers, with `positive` and `min`
//! - [`boolean`]: JSON booleans
//! - [`string_bool`]: strings mapped to booleans through truthy/falsy sets
//! - [`array`]: sequences whose elements delegate to an inner checker
//! - [`email`] / [`e164`]: formatted strings
//! - [`pattern`]: "template literal" strings decomposed into typed slots
//! - [`union`]: first matching branch wins
//! - [`object`]: a nested [`Schema`](crate::core::Schema)
//!
//! ## Example
//!
//! ```rust
//! use shape_guard::checkers::{self, Check};
//! use shape_guard::core::CheckContext;
//! use serde_json::json;
//!
//! let checkbox = checkers::union(vec![
//!     checkers::boolean().into(),
//!     checkers::string_bool().truthy(&["true", "checked"]).into(),
//! ]);
//! let ctx = CheckContext::root();
//! assert_eq!(checkbox.check(Some(&json!("checked")), &ctx).unwrap(), json!(true));
//! assert!(checkbox.check(Some(&json!("maybe")), &ctx).is_err());
//! ```

mod array;
mod boolean;
mod format;
mod number;
mod object;
mod pattern;
mod string;
mod union;

pub use array::ArrayChecker;
pub use boolean::{BooleanChecker, StringBoolChecker};
pub use format::{patterns, FormatChecker, FormatType};
pub use number::NumberChecker;
pub use object::ObjectChecker;
pub use pattern::{PatternChecker, PatternPart};
pub use string::StringChecker;
pub use union::UnionChecker;

use crate::core::{CheckContext, Issue, IssueCode, Messages, Schema};
use crate::prelude::*;
use serde_json::Value;
use std::fmt::Debug;

/// The outcome of checking one value.
pub type CheckOutcome = std::result::Result<Value, Vec<Issue>>;

/// A validator for a single value.
///
/// Implementations must be stateless so a compiled schema can be shared
/// across threads and reused across calls.
pub trait Check: Debug + Send + Sync {
    /// Checks a possibly absent value. `None` means the value was absent.
    fn check(&self, input: Option<&Value>, ctx: &CheckContext) -> CheckOutcome;

    /// Returns the short name of this checker kind.
    fn kind(&self) -> &'static str;
}

/// Any checker, as stored in a field spec.
#[derive(Debug, Clone)]
pub enum Checker {
    String(StringChecker),
    Number(NumberChecker),
    Boolean(BooleanChecker),
    StringBool(StringBoolChecker),
    Array(ArrayChecker),
    Format(FormatChecker),
    Pattern(PatternChecker),
    Union(UnionChecker),
    Object(ObjectChecker),
}

impl Checker {
    fn inner(&self) -> &dyn Check {
        match self {
            Checker::String(c) => c,
            Checker::Number(c) => c,
            Checker::Boolean(c) => c,
            Checker::StringBool(c) => c,
            Checker::Array(c) => c,
            Checker::Format(c) => c,
            Checker::Pattern(c) => c,
            Checker::Union(c) => c,
            Checker::Object(c) => c,
        }
    }

    /// Verifies definitions that cannot be rejected at construction time.
    pub(crate) fn verify(&self) -> Result<()> {
        match self {
            Checker::StringBool(c) => c.verify(),
            Checker::Array(c) => c.element().verify(),
            Checker::Union(c) => c.verify(),
            Checker::Pattern(c) => c.slots().try_for_each(Checker::verify),
            Checker::String(_)
            | Checker::Number(_)
            | Checker::Boolean(_)
            | Checker::Format(_)
            | Checker::Object(_) => Ok(()),
        }
    }
}

impl Check for Checker {
    fn check(&self, input: Option<&Value>, ctx: &CheckContext) -> CheckOutcome {
        self.inner().check(input, ctx)
    }

    fn kind(&self) -> &'static str {
        self.inner().kind()
    }
}

macro_rules! impl_into_checker {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Checker {
                fn from(checker: $ty) -> Self {
                    Checker::$variant(checker)
                }
            }
        )*
    };
}

impl_into_checker!(
    String => StringChecker,
    Number => NumberChecker,
    Boolean => BooleanChecker,
    StringBool => StringBoolChecker,
    Array => ArrayChecker,
    Format => FormatChecker,
    Pattern => PatternChecker,
    Union => UnionChecker,
    Object => ObjectChecker,
);

/// Returns the present value or a `missing` issue.
pub(crate) fn require<'a>(
    input: Option<&'a Value>,
    ctx: &CheckContext,
    expected: &str,
    messages: &Messages,
) -> std::result::Result<&'a Value, Vec<Issue>> {
    input.ok_or_else(|| vec![ctx.issue(IssueCode::Missing, None, expected, messages)])
}

/// Creates a string checker.
pub fn string() -> StringChecker {
    StringChecker::new()
}

/// Creates a number checker.
pub fn number() -> NumberChecker {
    NumberChecker::new()
}

/// Creates a boolean checker.
pub fn boolean() -> BooleanChecker {
    BooleanChecker::new()
}

/// Creates a string-bool checker with truthy `"true"` and falsy `"false"`.
pub fn string_bool() -> StringBoolChecker {
    StringBoolChecker::new()
}

/// Creates an array checker delegating elements to `element`.
pub fn array(element: impl Into<Checker>) -> ArrayChecker {
    ArrayChecker::new(element)
}

/// Creates an email checker using the HTML5 email pattern.
pub fn email() -> FormatChecker {
    FormatChecker::new(FormatType::Email)
}

/// Creates an E.164 phone number checker.
pub fn e164() -> FormatChecker {
    FormatChecker::new(FormatType::E164Phone)
}

/// Creates a pattern checker from literal and slot parts.
pub fn pattern(parts: Vec<PatternPart>) -> Result<PatternChecker> {
    PatternChecker::new(parts)
}

/// Creates a union of checkers tried in order.
pub fn union(branches: Vec<Checker>) -> UnionChecker {
    UnionChecker::new(branches)
}

/// Creates a checker validating nested objects against `schema`.
pub fn object(schema: Schema) -> ObjectChecker {
    ObjectChecker::new(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checker_delegates_kind() {
        let checker: Checker = string().into();
        assert_eq!(checker.kind(), "string");
        let checker: Checker = array(number()).into();
        assert_eq!(checker.kind(), "array");
    }

    #[test]
    fn test_every_checker_reports_missing() {
        let ctx = CheckContext::root().child("field");
        let checkers: Vec<Checker> = vec![
            string().into(),
            number().into(),
            boolean().into(),
            string_bool().into(),
            array(string()).into(),
            email().into(),
            e164().into(),
            union(vec![boolean().into()]).into(),
        ];
        for checker in checkers {
            let issues = checker.check(None, &ctx).unwrap_err();
            assert_eq!(issues.len(), 1, "{}", checker.kind());
            assert_eq!(issues[0].code, IssueCode::Missing);
            assert!(issues[0].input.is_none());
        }
    }

    #[test]
    fn test_verify_rejects_empty_union_in_array() {
        let checker: Checker = array(union(vec![])).into();
        assert!(matches!(checker.verify(), Err(GuardError::EmptyUnion)));
    }

    #[test]
    fn test_checkers_are_pure() {
        let checker: Checker = array(string().non_empty()).non_empty().into();
        let ctx = CheckContext::root();
        let input = json!(["a", ""]);
        let first = checker.check(Some(&input), &ctx);
        let second = checker.check(Some(&input), &ctx);
        assert_eq!(first, second);
    }
}
