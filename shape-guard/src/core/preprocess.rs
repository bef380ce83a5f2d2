//! Value transforms applied before a field's checker runs.
//!
//! Steps never produce issues. String-only steps pass every other shape
//! through unchanged so the checker can report the right error. Every step
//! except `SplitExact` and `Custom` is safe to run again on its own output.

use serde_json::Value;
use std::fmt;

/// One preprocessing step.
#[derive(Clone)]
pub enum Preprocess {
    /// Splits a string on runs of whitespace, dropping empty pieces
    SplitWhitespace,
    /// Splits a string on a separator, trimming pieces and dropping empty ones
    Split(String),
    /// Splits a string on every occurrence of a separator, keeping empty pieces
    ///
    /// `""` becomes `[""]` and `"a  b"` split on `" "` becomes `["a", "", "b"]`.
    /// Unlike the other split steps this is not idempotent on strings, but an
    /// array still passes through unchanged.
    SplitExact(String),
    /// Trims surrounding whitespace from a string
    Trim,
    /// Applies a pure function to the value
    Custom(fn(&Value) -> Value),
}

impl Preprocess {
    /// Applies this step to a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shape_guard::core::Preprocess;
    /// use serde_json::json;
    ///
    /// let split = Preprocess::SplitWhitespace;
    /// assert_eq!(split.apply(json!("Jo  Ann ")), json!(["Jo", "Ann"]));
    /// assert_eq!(split.apply(json!(["Jo"])), json!(["Jo"]));
    /// assert_eq!(split.apply(json!(null)), json!(null));
    /// ```
    pub fn apply(&self, value: Value) -> Value {
        match (self, value) {
            (Preprocess::SplitWhitespace, Value::String(text)) => Value::Array(
                text.split_whitespace()
                    .map(|piece| Value::String(piece.to_string()))
                    .collect(),
            ),
            (Preprocess::Split(separator), Value::String(text)) => Value::Array(
                text.split(separator.as_str())
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty())
                    .map(|piece| Value::String(piece.to_string()))
                    .collect(),
            ),
            (Preprocess::SplitExact(separator), Value::String(text)) => Value::Array(
                text.split(separator.as_str())
                    .map(|piece| Value::String(piece.to_string()))
                    .collect(),
            ),
            (Preprocess::Trim, Value::String(text)) => Value::String(text.trim().to_string()),
            (Preprocess::Custom(transform), value) => transform(&value),
            (_, value) => value,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Preprocess::SplitWhitespace => "split_whitespace",
            Preprocess::Split(_) => "split",
            Preprocess::SplitExact(_) => "split_exact",
            Preprocess::Trim => "trim",
            Preprocess::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Preprocess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preprocess::Split(separator) => f.debug_tuple("Split").field(separator).finish(),
            Preprocess::SplitExact(separator) => {
                f.debug_tuple("SplitExact").field(separator).finish()
            }
            other => f.write_str(other.name()),
        }
    }
}

/// Runs each step in order.
pub(crate) fn run_pipeline(steps: &[Preprocess], value: Value) -> Value {
    steps.iter().fold(value, |value, step| step.apply(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_whitespace() {
        let step = Preprocess::SplitWhitespace;
        assert_eq!(step.apply(json!("Mary Jane")), json!(["Mary", "Jane"]));
        assert_eq!(step.apply(json!("  ")), json!([]));
        assert_eq!(step.apply(json!(7)), json!(7));
    }

    #[test]
    fn test_split_on_separator() {
        let step = Preprocess::Split(",".to_string());
        assert_eq!(step.apply(json!("a, b,,c")), json!(["a", "b", "c"]));
    }

    #[test]
    fn test_split_exact_keeps_empty_pieces() {
        let step = Preprocess::SplitExact(" ".to_string());
        assert_eq!(step.apply(json!("")), json!([""]));
        assert_eq!(step.apply(json!("   ")), json!(["", "", "", ""]));
        assert_eq!(step.apply(json!("Mary  Jane")), json!(["Mary", "", "Jane"]));
        assert_eq!(step.apply(json!(["a", ""])), json!(["a", ""]));
        assert_eq!(format!("{step:?}"), "SplitExact(\" \")");
    }

    #[test]
    fn test_trim_and_custom() {
        assert_eq!(Preprocess::Trim.apply(json!("  x ")), json!("x"));

        fn lowercase(value: &Value) -> Value {
            match value {
                Value::String(s) => Value::String(s.to_lowercase()),
                other => other.clone(),
            }
        }
        assert_eq!(
            Preprocess::Custom(lowercase).apply(json!("CHECKED")),
            json!("checked")
        );
    }

    #[test]
    fn test_steps_are_idempotent_on_their_output() {
        for step in [
            Preprocess::SplitWhitespace,
            Preprocess::Split(";".to_string()),
            Preprocess::Trim,
        ] {
            let once = step.apply(json!(" a ; b c "));
            let twice = step.apply(once.clone());
            assert_eq!(once, twice, "{step:?}");
        }
    }

    #[test]
    fn test_pipeline_runs_in_order() {
        let steps = [Preprocess::Trim, Preprocess::Split(" ".to_string())];
        assert_eq!(run_pipeline(&steps, json!(" a b ")), json!(["a", "b"]));
        assert_eq!(run_pipeline(&[], json!("a b")), json!("a b"));
    }
}
