use std::fmt;

/// An input on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    FirstName,
    LastName,
    Email,
    Message,
}

static ALL_FIELDS: &[Field] = &[
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Message,
];

impl Field {
    /// Returns all fields in display order.
    pub fn all() -> &'static [Field] {
        ALL_FIELDS
    }

    /// Returns the field's position in display order.
    pub fn index(self) -> usize {
        match self {
            Field::FirstName => 0,
            Field::LastName => 1,
            Field::Email => 2,
            Field::Message => 3,
        }
    }

    /// Returns the field at `index` in display order, if any.
    pub fn from_index(index: usize) -> Option<Field> {
        ALL_FIELDS.get(index).copied()
    }

    /// Returns the name used to refer to the field in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Returns the human-readable input label.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Returns the hint shown while the input is empty.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Field::FirstName => Some("Edd"),
            Field::LastName => Some("Burke"),
            Field::Email => Some("bluebill1049@hotmail.com"),
            Field::Message => None,
        }
    }

    /// Returns `true` if the field has a validation rule.
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Message)
    }
}

#[mutants::skip]
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
