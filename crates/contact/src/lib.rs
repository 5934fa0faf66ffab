mod email;
mod field;
mod form;
mod handler;
mod mailer;
mod schema;

pub use email::*;
pub use field::*;
pub use form::*;
pub use handler::*;
pub use mailer::*;
pub use schema::*;
