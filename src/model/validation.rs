use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::contact::ContactForm;
use super::field::Field;

/// Minimum number of characters (after trimming) in a first name.
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// Validation errors for contact form fields.
///
/// The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Error: {0} must have at least 5 characters.")]
    Length(Field),
    #[error("Error: {0} is a required field.")]
    Required(Field),
    #[error("Error: {0} must be a valid email address.")]
    Format(Field),
}

impl ValidationError {
    /// Returns the field the error belongs to.
    pub fn field(&self) -> Field {
        match *self {
            ValidationError::Length(f)
            | ValidationError::Required(f)
            | ValidationError::Format(f) => f,
        }
    }
}

/// Domain labels may contain hyphens but not start or end with one.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@",
        r"[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*",
        r"\.[A-Za-z]{2,}$",
    ))
    .expect("valid hardcoded regex")
});

/// Returns `true` if `email` has the shape `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates a first name: at least [`FIRST_NAME_MIN_LEN`] characters once trimmed.
pub fn validate_first_name(first_name: &str) -> Result<(), ValidationError> {
    if first_name.trim().chars().count() < FIRST_NAME_MIN_LEN {
        Err(ValidationError::Length(Field::FirstName))
    } else {
        Ok(())
    }
}

/// Validates a last name: must be non-empty.
pub fn validate_last_name(last_name: &str) -> Result<(), ValidationError> {
    if last_name.is_empty() {
        Err(ValidationError::Required(Field::LastName))
    } else {
        Ok(())
    }
}

/// Validates an email address against [`is_valid_email`].
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::Format(Field::Email))
    }
}

/// Validates every field of `form`, returning all errors in field order.
///
/// An empty result means the form can be submitted. The message field has
/// no rule and never contributes an error.
pub fn validate(form: &ContactForm) -> Vec<ValidationError> {
    [
        validate_first_name(&form.first_name),
        validate_last_name(&form.last_name),
        validate_email(&form.email),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}
