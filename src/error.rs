use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Errors that end a request with the site's error page.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPageTemplate {
    status_code: u16,
    error_title: &'static str,
    error_message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_title, error_message) = match &self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Page Not Found",
                "The requested page could not be found.",
            ),
            AppError::Template(e) => {
                tracing::error!("Template error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred. Please try again later.",
                )
            }
        };

        let template = ErrorPageTemplate {
            status_code: status_code.as_u16(),
            error_title,
            error_message,
        };

        match template.render() {
            Ok(html) => (status_code, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {:?}", e);
                (status_code, error_message).into_response()
            }
        }
    }
}
