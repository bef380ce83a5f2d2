//! Shared schemas for the shape-guard demos.

use serde_json::{json, Value};
use shape_guard::checkers::{self, PatternPart};
use shape_guard::core::{FieldSpec, Issue, Messages, Preprocess, Schema};
use shape_guard::error::Result;

fn first_name_too_small(issue: &Issue) -> String {
    format!(
        "firstName has less than {} characters",
        issue.minimum.unwrap_or(1.0)
    )
}

/// Builds the strict contact form schema used by the demos.
pub fn contact_schema() -> Result<Schema> {
    let street = checkers::pattern(vec![
        PatternPart::slot(checkers::number().positive()),
        PatternPart::literal(" "),
        PatternPart::slot(checkers::string()),
    ])?
    .messages(
        Messages::new()
            .missing("street is missing")
            .wrong_type("street is malformed")
            .pattern_mismatch("street is malformed"),
    );

    let checkbox = checkers::union(vec![
        checkers::boolean().into(),
        checkers::string_bool()
            .truthy(&["true", "checked"])
            .falsy(&["false"])
            .into(),
    ]);

    Schema::builder("contact_form")
        .strict()
        .field(FieldSpec::new(
            "firstName",
            checkers::string().non_empty().messages(
                Messages::new()
                    .missing("firstName is missing")
                    .wrong_type("firstName isn't a string")
                    .too_small_with(first_name_too_small),
            ),
        ))
        .field(FieldSpec::new(
            "lastName",
            checkers::string()
                .non_empty()
                .messages(Messages::new().too_small("lastName is empty")),
        ))
        .field(
            FieldSpec::new(
                "middleNames",
                checkers::array(checkers::string()).non_empty().messages(
                    Messages::new()
                        .missing("middleNames is missing. Please use null for optional values")
                        .wrong_type("middleNames isn't a string")
                        .too_small("middleNames is empty"),
                ),
            )
            .preprocess(Preprocess::SplitWhitespace)
            .nullable(),
        )
        .field(FieldSpec::new(
            "phoneNumber",
            checkers::e164().messages(Messages::all("phoneNumber is not a E.164 number")),
        ))
        .field(FieldSpec::new(
            "email",
            checkers::email().messages(Messages::all("email is invalid")),
        ))
        .field(FieldSpec::new("street", street))
        .field(FieldSpec::new(
            "city",
            checkers::string()
                .non_empty()
                .messages(Messages::new().too_small("city is invalid")),
        ))
        .field(FieldSpec::new("checkbox", checkbox))
        .build()
}

/// A form submission with several problems.
pub fn sample_submission() -> Value {
    json!({
        "firstName": "",
        "lastName": "Lovelace",
        "middleNames": "   ",
        "phoneNumber": "020 7183 8750",
        "email": "ada.example.com",
        "street": "Main Street",
        "checkbox": "maybe",
        "newsletter": true
    })
}
