use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// One user-editable input of the contact form, in form order.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub(crate) fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your@email.com",
            Field::Subject => "Project discussion, collaboration, etc.",
            Field::Message => "Tell me about your project, ideas, or just say hello...",
        }
    }

    /// `textarea` for the message body, an `<input type>` otherwise.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Message => "textarea",
            Field::Name | Field::Subject => "text",
        }
    }
}

/// Client-side state of a single field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub errors: Vec<String>,
}
