use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portfolio_contact::{Composer, EmailDocument, FormController, Mailer, SubmissionHandler};

pub const FROM_ADDRESS: &str = "onboarding@portfolio.localhost";
pub const OWNER_ADDRESS: &str = "owner@portfolio.localhost";

/// Delivery service double that keeps every email it was asked to send.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<EmailDocument>>>,
    fail: bool,
}

#[allow(dead_code)]
impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<EmailDocument> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: EmailDocument) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("relay refused connection");
        }

        self.sent.lock().unwrap().push(email);

        Ok(())
    }
}

pub fn setup_handler(mailer: RecordingMailer) -> SubmissionHandler {
    SubmissionHandler::new(mailer, Composer::new(FROM_ADDRESS, OWNER_ADDRESS))
}

pub fn filled_form(name: impl Into<String>) -> FormController {
    let name = name.into();
    let mut form = FormController::new();
    form.set_field_value(
        portfolio_contact::Field::Email,
        format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
    );
    form.set_field_value(portfolio_contact::Field::Name, name);
    form.set_field_value(portfolio_contact::Field::Subject, "Project idea");
    form.set_field_value(
        portfolio_contact::Field::Message,
        "Hello, I'd like to discuss.",
    );
    form
}
