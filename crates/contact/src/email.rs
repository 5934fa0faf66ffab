use askama::Template;

use crate::ContactForm;

/// Owner-facing notification built from a validated form.
///
/// Lives only for the duration of one delivery call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailDocument {
    pub sender_name: String,
    pub sender_address: String,
    /// Address the submitter typed in, so the owner can answer directly.
    pub reply_to: String,
    pub recipient: String,
    pub subject_line: String,
    pub body_html: String,
}

impl EmailDocument {
    pub fn sender_display(&self) -> String {
        format!("{} <{}>", self.sender_name, self.sender_address)
    }
}

#[derive(Template)]
#[template(path = "emails/contact.html")]
struct ContactEmailTemplate<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

#[derive(Clone, Debug)]
pub struct Composer {
    from_address: String,
    owner_address: String,
}

impl Composer {
    pub fn new(from_address: impl Into<String>, owner_address: impl Into<String>) -> Self {
        Self {
            from_address: from_address.into(),
            owner_address: owner_address.into(),
        }
    }

    pub fn compose(&self, form: &ContactForm) -> Result<EmailDocument, askama::Error> {
        let body_html = ContactEmailTemplate {
            name: &form.name,
            email: &form.email,
            subject: &form.subject,
            message: &form.message,
        }
        .render()?;

        Ok(EmailDocument {
            sender_name: form.name.to_owned(),
            sender_address: self.from_address.to_owned(),
            reply_to: form.email.to_owned(),
            recipient: self.owner_address.to_owned(),
            subject_line: format!("New message: {}", form.subject),
            body_html,
        })
    }
}
