//! The contract walker.

use super::{Field, FieldError, FieldValue, Rule, Validate, ValidationErrors};

/// Validates `value` against its contract, recursing into nested values.
///
/// # Errors
///
/// Returns every violation found, in contract order, when at least one
/// rule fails.
pub fn validate(value: &dyn Validate) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    walk(value, value.struct_name(), &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::new(errors))
    }
}

fn walk(value: &dyn Validate, prefix: &str, errors: &mut Vec<FieldError>) {
    for field in value.fields() {
        let path = format!("{prefix}.{}", field.name);
        check_field(&field, path, errors);
    }
}

fn check_field(field: &Field<'_>, path: String, errors: &mut Vec<FieldError>) {
    let present = !field.value.is_zero();

    for rule in field.rules {
        match *rule {
            Rule::Required if !present => {
                errors.push(FieldError::new(path, field.name, *rule));
                return;
            }
            Rule::OneOf(allowed) if present && !field.value.is_one_of(allowed) => {
                errors.push(FieldError::new(path, field.name, *rule));
                return;
            }
            Rule::Dive => {
                if let FieldValue::Nested(Some(inner)) = field.value {
                    walk(inner, &path, errors);
                }
            }
            _ => {}
        }
    }
}
