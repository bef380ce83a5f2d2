//! Cross-field refinement rules.
//!
//! A refinement fires (emits a `custom` issue at its path) only when its
//! guard returns true and its predicate returns false. Refinements run after
//! per-field validation and only when no field produced a fatal issue.

use super::issue::PathSegment;
use serde_json::{Map, Value};
use std::fmt;

/// A pure test over the object view handed to refinements.
pub type RulePredicate = fn(&Map<String, Value>) -> bool;

fn always(_: &Map<String, Value>) -> bool {
    true
}

/// A guarded cross-field rule.
///
/// # Examples
///
/// ```rust
/// use shape_guard::core::Refinement;
/// use serde_json::{json, Map, Value};
///
/// fn password_matches_flag(view: &Map<String, Value>) -> bool {
///     match (view.get("requiresPassword"), view.get("password")) {
///         (Some(Value::Bool(false)), Some(Value::Null) | None) => true,
///         (Some(Value::Bool(true)), Some(Value::String(_))) => true,
///         _ => false,
///     }
/// }
///
/// let rule = Refinement::new(["password"], "Password is required", password_matches_flag);
/// let view = json!({ "requiresPassword": true, "password": null });
/// assert!(rule.violated_by(view.as_object().unwrap()));
/// ```
#[derive(Clone)]
pub struct Refinement {
    path: Vec<PathSegment>,
    message: String,
    guard: RulePredicate,
    predicate: RulePredicate,
}

impl Refinement {
    /// Creates a rule with an always-true guard.
    pub fn new<P, S>(path: P, message: impl Into<String>, predicate: RulePredicate) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            message: message.into(),
            guard: always,
            predicate,
        }
    }

    /// Only evaluates the predicate when `guard` returns true.
    pub fn when(mut self, guard: RulePredicate) -> Self {
        self.guard = guard;
        self
    }

    /// Returns the issue path.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Returns the issue message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluates the guard.
    pub fn applies_to(&self, view: &Map<String, Value>) -> bool {
        (self.guard)(view)
    }

    /// Evaluates the predicate alone.
    pub fn satisfied_by(&self, view: &Map<String, Value>) -> bool {
        (self.predicate)(view)
    }

    /// Returns true if the guard holds and the predicate fails.
    pub fn violated_by(&self, view: &Map<String, Value>) -> bool {
        self.applies_to(view) && !self.satisfied_by(view)
    }

    /// Renders the path for logs, e.g. `password` or `tags[0]`.
    pub(crate) fn path_label(&self) -> String {
        crate::report::format_path(&self.path)
    }
}

impl fmt::Debug for Refinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refinement")
            .field("path", &self.path)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn has_password(view: &Map<String, Value>) -> bool {
        matches!(view.get("password"), Some(Value::String(_)))
    }

    fn requires_password(view: &Map<String, Value>) -> bool {
        view.get("requiresPassword") == Some(&Value::Bool(true))
    }

    fn view(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_default_guard_always_applies() {
        let rule = Refinement::new(["password"], "Password is required", has_password);
        assert!(rule.applies_to(&Map::new()));
        assert!(rule.violated_by(&view(json!({ "password": null }))));
        assert!(!rule.violated_by(&view(json!({ "password": "x" }))));
    }

    #[test]
    fn test_guard_skips_predicate() {
        let rule = Refinement::new(["password"], "Password is required", has_password)
            .when(requires_password);
        assert!(!rule.violated_by(&view(json!({ "requiresPassword": false, "password": null }))));
        assert!(rule.violated_by(&view(json!({ "requiresPassword": true, "password": null }))));
        assert!(!rule.violated_by(&view(json!({ "requiresPassword": true, "password": "x" }))));
    }

    #[test]
    fn test_nested_path() {
        let rule = Refinement::new(
            [PathSegment::from("tags"), PathSegment::Index(0)],
            "first tag",
            has_password,
        );
        assert_eq!(rule.path_label(), "tags[0]");
        assert_eq!(rule.message(), "first tag");
    }
}
