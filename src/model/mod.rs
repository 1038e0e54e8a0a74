mod contact;
mod field;
mod submission;
mod validation;

pub use contact::ContactForm;
pub use field::Field;
pub use submission::Submission;
pub use validation::{
    FIRST_NAME_MIN_LEN, ValidationError, is_valid_email, validate, validate_email,
    validate_first_name, validate_last_name,
};
