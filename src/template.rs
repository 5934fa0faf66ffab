use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::error::AppError;

/// An askama page sent with the given status.
///
/// Rendering failures fall through to the error page.
pub struct Page<T>(pub StatusCode, pub T);

impl<T: askama::Template> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        let Page(status, template) = self;

        match template.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => AppError::from(err).into_response(),
        }
    }
}
