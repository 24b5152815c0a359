use mongodb::bson::oid::ObjectId;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Flatten a failed validation into the message of every violated
/// constraint. Validation is all-or-nothing: callers get the full list, not
/// just the first failure.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    messages
}

fn collect_messages(errors: &ValidationErrors, messages: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    match &error.message {
                        Some(message) => messages.push(message.to_string()),
                        None => messages.push(format!("{} is invalid", field)),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, messages),
            ValidationErrorsKind::List(entries) => {
                for nested in entries.values() {
                    collect_messages(nested, messages);
                }
            }
        }
    }
}

/// Every entry of a coach-reference list must be a well-formed object id.
pub fn validate_object_id_list(ids: &[String]) -> Result<(), ValidationError> {
    for id in ids {
        if ObjectId::parse_str(id).is_err() {
            let mut error = ValidationError::new("object_id");
            error.message = Some("Coach references must be valid object ids".into());
            return Err(error);
        }
    }
    Ok(())
}
