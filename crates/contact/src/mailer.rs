use async_trait::async_trait;

use crate::EmailDocument;

/// External email-delivery service.
///
/// Implementations make a single best-effort attempt; any error is reported
/// back to the submitter as a generic delivery failure.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    async fn send(&self, email: EmailDocument) -> anyhow::Result<()>;
}
