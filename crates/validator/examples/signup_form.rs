//! Validates a sign-up form and prints every field's errors.
//!
//! A trace-level subscriber is installed so combinator events show up
//! alongside the report:
//!
//! ```text
//! cargo run -p validatish --example signup_form
//! ```

use serde_json::json;
use tracing::Level;
use validatish::prelude::*;

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(false)
        .init();

    let messages = Messages::from_json(r#"{ "required": "please fill this in" }"#)?;

    let fields: Vec<(&str, Validator)> = vec![
        (
            "username",
            all![
                required().with_messages(messages.clone()),
                plain_text_with("_")?,
                length(3, 20)?,
            ],
        ),
        ("email", all![required().with_messages(messages), email()]),
        ("website", url_with_scheme().into()),
        ("age", any![range(18.0, 130.0)?, equal("n/a")]),
        ("nickname", always().into()),
    ];

    let form = json!({
        "username": "no spaces allowed",
        "email": "",
        "website": "example.com",
        "age": 12,
    });

    for (name, validator) in &fields {
        let value = form.get(*name).cloned().unwrap_or_default();
        let marker = if is_required(Some(validator)) { "*" } else { " " };

        if validator.is_noop() {
            println!("{marker} {name}: no validation");
            continue;
        }

        match validator.validate(&value) {
            Ok(()) => println!("{marker} {name}: ok"),
            Err(err) => {
                println!("{marker} {name}: {err}");
                for message in err.leaf_messages() {
                    println!("      - {message}");
                }
            }
        }
    }

    Ok(())
}
