use super::field::Field;

/// Current values of every contact form input.
///
/// An empty `message` means no message was entered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Creates a form with all fields empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Returns a mutable reference to the value of `field`.
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }
}
