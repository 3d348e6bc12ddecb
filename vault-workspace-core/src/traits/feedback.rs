//! User feedback abstraction

use async_trait::async_trait;

/// Transient user notification channel.
#[async_trait]
pub trait FeedbackChannel: Send + Sync {
    /// Shows an error notification.
    async fn display_error(&self, message: &str);

    /// Shows a success notification.
    async fn display_success(&self, message: &str);
}
