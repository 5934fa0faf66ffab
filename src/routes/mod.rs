use axum::{Router, routing::get};
use portfolio_contact::SubmissionHandler;

use crate::error::AppError;

mod contact;
mod health;

pub use contact::ContactTemplate;

#[derive(Clone)]
pub struct AppState {
    pub handler: SubmissionHandler,
}

pub async fn fallback() -> AppError {
    AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/contact", get(contact::page).post(contact::action))
        .fallback(fallback)
        .with_state(app_state)
}
