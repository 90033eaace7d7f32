//! Input widget for a form field

use crate::shared::lookup::LookupSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Widget {
    #[default]
    Text,
    TextArea,
    Email,
    Phone,
    Password,
    Integer,
    Decimal,
    /// ISO date, edited with `<input type="date">`.
    Date,
    /// `HH:MM`, edited with `<input type="time">`.
    Time,
    Checkbox,
    /// Fixed list of string values.
    Choice(&'static [&'static str]),
    /// Reference to another entity, stored as its numeric id.
    Lookup(LookupSource),
    /// File part of a multipart submission; never part of the JSON payload.
    File,
}

impl Widget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextArea => "textarea",
            Self::Email => "email",
            Self::Phone => "tel",
            Self::Password => "password",
            Self::Integer | Self::Decimal => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::Checkbox => "checkbox",
            Self::Choice(_) | Self::Lookup(_) => "select",
            Self::File => "file",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Decimal | Self::Lookup(_))
    }

    pub fn lookup(&self) -> Option<&LookupSource> {
        match self {
            Self::Lookup(source) => Some(source),
            _ => None,
        }
    }
}
