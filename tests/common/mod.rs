//! Shared setup for router-level tests

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use http_body_util::BodyExt;
use portfolio::AppState;
use portfolio_contact::{Composer, ContactForm, MockMailer, SubmissionHandler};

pub const OWNER_ADDRESS: &str = "owner@portfolio.localhost";

pub fn create_test_app(mailer: MockMailer) -> Router {
    let composer = Composer::new("onboarding@portfolio.localhost", OWNER_ADDRESS);

    portfolio::router(AppState {
        handler: SubmissionHandler::new(mailer, composer),
    })
}

pub fn valid_form() -> ContactForm {
    ContactForm {
        name: "Jo Lee".to_owned(),
        email: "jo@example.com".to_owned(),
        subject: "Project idea".to_owned(),
        message: "Hello, I'd like to discuss.".to_owned(),
    }
}

pub fn post_contact(body: impl Into<String>, accept: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::ACCEPT, accept)
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn form_body(form: &ContactForm) -> String {
    serde_urlencoded::to_string(form).unwrap()
}

pub async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
