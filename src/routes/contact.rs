use axum::{
    Json,
    extract::{Form, State, rejection::FormRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use portfolio_contact::{
    ContactForm, FormController, FormView, GENERIC_FAILURE, SubmissionError, SubmissionResponse,
    SubmissionState,
};

use crate::{routes::AppState, template::Page};

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: FormView,
}

pub async fn page() -> impl IntoResponse {
    Page(
        StatusCode::OK,
        ContactTemplate {
            form: FormController::new().view(),
        },
    )
}

/// POST /contact
///
/// Answers with a JSON `SubmissionResponse` unless the client asks for HTML,
/// in which case the form page is rendered again with inline feedback.
pub async fn action(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    input: Result<Form<ContactForm>, FormRejection>,
) -> Response {
    let Form(input) = match input {
        Ok(input) => input,
        Err(rejection) => return reject_body(&headers, rejection),
    };

    if wants_html(&headers) {
        return render_action(&app_state, input).await;
    }

    let result = app_state.handler.process(input).await;

    (status_of(&result), Json(SubmissionResponse::from(&result))).into_response()
}

async fn render_action(app_state: &AppState, input: ContactForm) -> Response {
    let mut form = FormController::from_form(input);

    let Some(submission) = form.begin_submit() else {
        return Page(
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactTemplate { form: form.view() },
        )
        .into_response();
    };

    let result = app_state
        .handler
        .process(submission.form().to_owned())
        .await;
    form.complete(submission.ticket(), Ok(SubmissionResponse::from(&result)));

    Page(status_of(&result), ContactTemplate { form: form.view() }).into_response()
}

/// Unreadable bodies get the same response shape as any failed submission.
fn reject_body(headers: &HeaderMap, rejection: FormRejection) -> Response {
    tracing::warn!(
        status = %rejection.status(),
        reason = %rejection.body_text(),
        "Rejected contact request body"
    );

    if wants_html(headers) {
        let mut form = FormController::new().view();
        form.state = SubmissionState::Failed(GENERIC_FAILURE.to_owned());

        return Page(StatusCode::UNPROCESSABLE_ENTITY, ContactTemplate { form }).into_response();
    }

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(SubmissionResponse::failure(GENERIC_FAILURE)),
    )
        .into_response()
}

fn status_of(result: &Result<(), SubmissionError>) -> StatusCode {
    match result {
        Ok(()) => StatusCode::OK,
        Err(SubmissionError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(SubmissionError::Composition(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        Err(SubmissionError::Dispatch(_)) => StatusCode::BAD_GATEWAY,
    }
}

fn wants_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}
