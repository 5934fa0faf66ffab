use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::VariantArray;
use validator::{Validate, ValidationError};

use crate::Field;

// Dot-separated local part that neither starts nor ends with a dot, and a
// dotted domain ending in an alphabetic TLD of two letters or more.
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

/// Field values as they travel between the form and the submission handler.
///
/// The validation rules below are the single schema shared by the form
/// controller and the handler. Absent keys deserialize to empty strings so an
/// incomplete request body fails validation instead of extraction.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ContactForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(
        email(message = "Please enter a valid email"),
        regex(path = *RE_EMAIL, message = "Please enter a valid email")
    )]
    pub email: String,
    #[validate(length(min = 5, message = "Subject must be at least 5 characters"))]
    pub subject: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Messages of every violated rule, indexed in form order.
    pub fn errors(&self) -> [Vec<String>; 4] {
        let mut collected: [Vec<String>; 4] = Default::default();

        let Err(errors) = self.validate() else {
            return collected;
        };

        let field_errors = errors.field_errors();
        for field in Field::VARIANTS {
            let key: &str = field.as_ref();
            if let Some(errors) = field_errors.get(key) {
                let mut messages: Vec<String> = errors.iter().map(message).collect();
                messages.dedup();
                collected[field.index()] = messages;
            }
        }

        collected
    }

    pub fn field_errors(&self, field: Field) -> Vec<String> {
        let [name, email, subject, message] = self.errors();
        match field {
            Field::Name => name,
            Field::Email => email,
            Field::Subject => subject,
            Field::Message => message,
        }
    }

    /// The first violated rule in form order, if any.
    pub fn first_violation(&self) -> Option<String> {
        self.errors()
            .into_iter()
            .find_map(|errors| errors.into_iter().next())
    }
}

fn message(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}
