use portfolio_contact::{
    ContactForm, Field, FormController, GENERIC_FAILURE, SubmissionResponse, SubmissionState,
    SubmitTransport,
};

mod helpers;

use helpers::{OWNER_ADDRESS, RecordingMailer};

#[tokio::test]
async fn test_submit_delivers_owner_notification() -> anyhow::Result<()> {
    let mailer = RecordingMailer::default();
    let handler = helpers::setup_handler(mailer.clone());
    let mut form = helpers::filled_form("Jo Lee");

    let state = form.submit(&handler).await;
    assert_eq!(state, &SubmissionState::Succeeded);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, OWNER_ADDRESS);
    assert_eq!(sent[0].reply_to, "jo.lee@example.com");
    assert_eq!(sent[0].subject_line, "New message: Project idea");
    assert_eq!(form.field(Field::Name).value, "");

    Ok(())
}

#[tokio::test]
async fn test_delivery_failure_surfaces_generic_error() -> anyhow::Result<()> {
    let handler = helpers::setup_handler(RecordingMailer::failing());
    let mut form = helpers::filled_form("Jo Lee");

    form.submit(&handler).await;

    assert_eq!(
        form.state(),
        &SubmissionState::Failed(GENERIC_FAILURE.to_owned())
    );
    assert_eq!(form.field(Field::Name).value, "Jo Lee");

    Ok(())
}

#[tokio::test]
async fn test_handler_rejects_bypassed_client_validation() -> anyhow::Result<()> {
    let mailer = RecordingMailer::default();
    let handler = helpers::setup_handler(mailer.clone());

    let response = handler
        .send(&ContactForm {
            name: "Jo Lee".to_owned(),
            email: "jo@example.com".to_owned(),
            subject: "Project idea".to_owned(),
            message: "Too short".to_owned(),
        })
        .await?;

    assert!(!response.success);
    assert!(mailer.sent().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_client_and_server_schemas_agree() -> anyhow::Result<()> {
    let mailer = RecordingMailer::default();
    let handler = helpers::setup_handler(mailer.clone());

    let cases = [
        (Field::Name, "ab", true),
        (Field::Name, "a", false),
        (Field::Email, "x@y.com", true),
        (Field::Email, "not-an-email", false),
        (Field::Email, "jo.lee@example.co", true),
        (Field::Email, "jo..lee@example.com", false),
        (Field::Email, ".jo@example.com", false),
        (Field::Email, "jo@localhost", false),
        (Field::Email, "jo@example.c", false),
        (Field::Email, "a@[127.0.0.1]", false),
        (Field::Subject, "Hello", true),
        (Field::Message, "0123456789", true),
    ];

    for (field, value, expected) in cases {
        let mut form = helpers::filled_form("Jo Lee");
        form.set_field_value(field, value);
        assert_eq!(form.is_valid(), expected, "client: {field} = {value:?}");

        let response = handler.send(&form.form()).await?;
        assert_eq!(response.success, expected, "server: {field} = {value:?}");
        if field == Field::Email && !expected {
            assert_eq!(response.error.as_deref(), Some("Please enter a valid email"));
        }
    }

    assert_eq!(mailer.sent().len(), 5);

    Ok(())
}

#[tokio::test]
async fn test_overlapping_submissions_send_twice_latest_wins() -> anyhow::Result<()> {
    let mailer = RecordingMailer::default();
    let handler = helpers::setup_handler(mailer.clone());
    let mut form = helpers::filled_form("Jo Lee");

    let first = form.begin_submit().expect("valid form");
    let second = form.begin_submit().expect("valid form");

    let (first_outcome, second_outcome) =
        futures::join!(handler.send(first.form()), handler.send(second.form()));

    assert!(form.complete(second.ticket(), second_outcome));
    assert!(!form.complete(first.ticket(), first_outcome));
    assert!(form.state().is_succeeded());
    assert_eq!(mailer.sent().len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_untouched_form_submit_reveals_all_errors() -> anyhow::Result<()> {
    let mailer = RecordingMailer::default();
    let handler = helpers::setup_handler(mailer.clone());
    let mut form = FormController::new();

    form.submit(&handler).await;

    let view = form.view();
    assert_eq!(view.state, SubmissionState::Idle);
    assert!(view.fields.iter().all(|field| field.error().is_some()));
    assert!(mailer.sent().is_empty());

    let response: SubmissionResponse = handler.send(&form.form()).await?;
    assert_eq!(
        response.error.as_deref(),
        Some("Name must be at least 2 characters")
    );

    Ok(())
}
