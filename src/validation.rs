use validator::{ValidationErrors, ValidationErrorsKind};

/// Flattens validator output into client-facing messages.
///
/// Fields are visited in name order so the same input always yields the same
/// list. Errors without a custom message fall back to `"<field> is invalid"`.
pub fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = Vec::new();
    for (field, kind) in fields {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    match &error.message {
                        Some(message) => out.push(message.to_string()),
                        None => out.push(format!("{} is invalid", field)),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => out.extend(messages(nested)),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    out.extend(messages(nested));
                }
            }
        }
    }
    out
}
