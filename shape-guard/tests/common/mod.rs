//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{json, Map, Value};
use shape_guard::checkers;
use shape_guard::core::{FieldSpec, Refinement, Schema};

/// The demos' contact form schema: strict, every field required.
pub fn contact_schema() -> Schema {
    shape_demos::contact_schema().unwrap()
}

/// A contact form input that passes [`contact_schema`].
pub fn valid_contact() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "middleNames": "Augusta King",
        "phoneNumber": "+442071838750",
        "email": "ada@example.com",
        "street": "10 Main",
        "city": "London",
        "checkbox": "checked"
    })
}

/// `valid_contact` with `key` removed.
pub fn contact_without(key: &str) -> Value {
    let mut value = valid_contact();
    if let Some(object) = value.as_object_mut() {
        object.remove(key);
    }
    value
}

/// `valid_contact` with `key` set to `replacement`.
pub fn contact_with(key: &str, replacement: Value) -> Value {
    let mut value = valid_contact();
    if let Some(object) = value.as_object_mut() {
        object.insert(key.to_string(), replacement);
    }
    value
}

fn password_matches_flag(view: &Map<String, Value>) -> bool {
    matches!(
        (view.get("requiresPassword"), view.get("password")),
        (Some(Value::Bool(false)), Some(Value::Null))
            | (Some(Value::Bool(true)), Some(Value::String(_)))
    )
}

/// An account schema whose password presence must match a flag.
pub fn account_schema() -> Schema {
    Schema::builder("account")
        .field(FieldSpec::new("requiresPassword", checkers::boolean()))
        .field(FieldSpec::new("password", checkers::string()).nullable())
        .refine(Refinement::new(
            ["password"],
            "Password must be set when required, and null otherwise",
            password_matches_flag,
        ))
        .build()
        .unwrap()
}
