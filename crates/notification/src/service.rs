//! Email notification service using lettre

use async_trait::async_trait;
use lettre::{
    Address, Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use portfolio_contact::{EmailDocument, Mailer};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    /// Envelope sender; the submitter's name is shown in front of it.
    pub from_address: String,
    /// Site owner receiving contact messages.
    pub contact_address: String,
}

impl EmailConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.smtp_host.is_empty() {
            return Err("SMTP host must not be empty".to_string());
        }
        if self.from_address.parse::<Address>().is_err() {
            return Err(format!("Invalid from address: {}", self.from_address));
        }
        if self.contact_address.parse::<Address>().is_err() {
            return Err(format!("Invalid contact address: {}", self.contact_address));
        }
        Ok(())
    }
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    skip_sending: bool,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            skip_sending: false,
        })
    }

    /// Email service that logs messages instead of talking to an SMTP relay
    pub fn new_mock(config: &EmailConfig) -> Self {
        let mailer = SmtpTransport::builder_dangerous("localhost")
            .port(1025)
            .build();

        tracing::info!(
            contact = %config.contact_address,
            "Mock email service initialized (SMTP calls skipped)"
        );

        Self {
            mailer,
            skip_sending: true,
        }
    }
}

/// Build the lettre message for a contact notification.
pub fn build_message(email: &EmailDocument) -> anyhow::Result<Message> {
    let from = Mailbox::new(
        Some(email.sender_name.to_owned()),
        email.sender_address.parse()?,
    );
    let reply_to = Mailbox::new(Some(email.sender_name.to_owned()), email.reply_to.parse()?);

    Ok(Message::builder()
        .from(from)
        .reply_to(reply_to)
        .to(email.recipient.parse()?)
        .subject(email.subject_line.to_owned())
        .header(header::ContentType::TEXT_HTML)
        .body(email.body_html.to_owned())?)
}

#[async_trait]
impl Mailer for EmailService {
    async fn send(&self, email: EmailDocument) -> anyhow::Result<()> {
        tracing::info!(to = %email.recipient, subject = %email.subject_line, "Sending email");

        let message = build_message(&email)?;

        if self.skip_sending {
            tracing::info!("Mock email service: skipping SMTP send");
            return Ok(());
        }

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}
