use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use ulid::Ulid;

use crate::{Composer, ContactForm, Mailer, SubmitTransport};

pub const GENERIC_FAILURE: &str = "Failed to send email. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Validation(String),

    #[error("failed to render email: {0}")]
    Composition(#[from] askama::Error),

    #[error("failed to deliver email: {0}")]
    Dispatch(anyhow::Error),
}

impl SubmissionError {
    /// Text safe to show the submitter. Only validation failures are specific.
    pub fn public_message(&self) -> &str {
        match self {
            SubmissionError::Validation(violation) => violation,
            SubmissionError::Composition(_) | SubmissionError::Dispatch(_) => GENERIC_FAILURE,
        }
    }
}

/// Wire result of one submission.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

impl From<&Result<(), SubmissionError>> for SubmissionResponse {
    fn from(result: &Result<(), SubmissionError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(err) => Self::failure(err.public_message()),
        }
    }
}

/// Server side of the pipeline: validate, compose, dispatch.
///
/// Holds no per-request state; every call owns its email document.
#[derive(Clone)]
pub struct SubmissionHandler {
    mailer: Arc<dyn Mailer>,
    composer: Composer,
}

impl SubmissionHandler {
    pub fn new(mailer: impl Mailer, composer: Composer) -> Self {
        Self {
            mailer: Arc::new(mailer),
            composer,
        }
    }

    pub async fn process(&self, form: ContactForm) -> Result<(), SubmissionError> {
        let span = tracing::info_span!("contact_submission", submission_id = %Ulid::new());

        async move {
            let result = self.run(form).await;
            match &result {
                Ok(()) => tracing::info!("Contact message delivered"),
                Err(SubmissionError::Validation(violation)) => {
                    tracing::info!(%violation, "Contact submission rejected")
                }
                Err(err) => tracing::error!(error = %err, "Contact submission failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    pub async fn handle(&self, form: ContactForm) -> SubmissionResponse {
        SubmissionResponse::from(&self.process(form).await)
    }

    async fn run(&self, form: ContactForm) -> Result<(), SubmissionError> {
        if let Some(violation) = form.first_violation() {
            return Err(SubmissionError::Validation(violation));
        }

        tracing::debug!("Composing email");
        let email = self.composer.compose(&form)?;

        tracing::debug!(to = %email.recipient, "Dispatching email");
        self.mailer
            .send(email)
            .await
            .map_err(SubmissionError::Dispatch)
    }
}

#[async_trait]
impl SubmitTransport for SubmissionHandler {
    async fn send(&self, form: &ContactForm) -> anyhow::Result<SubmissionResponse> {
        Ok(self.handle(form.clone()).await)
    }
}
