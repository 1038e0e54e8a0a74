use super::contact::ContactForm;
use super::validation::{ValidationError, validate};

/// Read-only snapshot of a contact form taken at a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `None` when no message was entered.
    pub message: Option<String>,
}

impl Submission {
    /// Validates `form` and captures its values if there are no errors.
    ///
    /// On failure every validation error is returned, in field order.
    pub fn capture(form: &ContactForm) -> Result<Self, Vec<ValidationError>> {
        let errors = validate(form);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            email: form.email.clone(),
            message: (!form.message.is_empty()).then(|| form.message.clone()),
        })
    }
}
