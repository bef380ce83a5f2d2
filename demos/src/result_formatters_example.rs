//! Example demonstrating the result formatters in shape-guard.
//!
//! This example shows how to format validation results in different ways:
//! - Plain text for console output
//! - JSON for programmatic consumption
//! - Custom formatting configurations

use shape_demos::{contact_schema, sample_submission};
use shape_guard::formatters::{FormatterConfig, JsonFormatter, ResultFormatter, TextFormatter};
use std::error::Error;

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let schema = contact_schema()?;
    let result = schema.validate(&sample_submission());

    println!("=== Text (default) ===");
    print!("{}", TextFormatter::new().format(&result)?);

    println!("\n=== Text (CI, first 3 issues) ===");
    let ci = FormatterConfig::ci().with_max_issues(3);
    print!("{}", TextFormatter::with_config(ci).format(&result)?);

    println!("\n=== JSON (minimal) ===");
    println!(
        "{}",
        JsonFormatter::with_config(FormatterConfig::minimal()).format(&result)?
    );

    println!("\n=== JSON (pretty, via result) ===");
    println!("{}", result.format_with(&JsonFormatter::new())?);

    Ok(())
}
