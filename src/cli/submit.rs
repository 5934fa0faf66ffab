use anyhow::Result;
use portfolio::client::HttpClient;
use portfolio_contact::{ContactForm, FormController, SUCCESS_MESSAGE, SubmissionState};

pub async fn submit(url: &str, input: ContactForm) -> Result<()> {
    let client = HttpClient::new(url);
    let mut form = FormController::from_form(input);

    tracing::info!(endpoint = client.endpoint(), "Submitting contact form");

    let state = form.submit(&client).await.clone();

    match state {
        SubmissionState::Succeeded => {
            println!("{SUCCESS_MESSAGE}");
            Ok(())
        }
        SubmissionState::Failed(error) => anyhow::bail!("{error}"),
        SubmissionState::Idle | SubmissionState::Submitting => {
            for field in form.view().fields {
                if let Some(error) = field.error() {
                    eprintln!("{}: {error}", field.label);
                }
            }
            anyhow::bail!("Contact form is invalid")
        }
    }
}
