use anyhow::Context;
use async_trait::async_trait;
use portfolio_contact::{ContactForm, SubmissionResponse, SubmitTransport};
use reqwest::header::ACCEPT;

/// Sends contact forms to a running portfolio server.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpClient {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/contact", base_url.as_ref().trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpClient {
    async fn send(&self, form: &ContactForm) -> anyhow::Result<SubmissionResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .form(form)
            .send()
            .await?;

        // Failures carry a SubmissionResponse body as well.
        let status = response.status();
        response
            .json::<SubmissionResponse>()
            .await
            .with_context(|| format!("Unexpected response from {} ({status})", self.endpoint))
    }
}
