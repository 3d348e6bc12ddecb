//! Log-backed feedback channel

use async_trait::async_trait;

use vault_workspace_core::traits::FeedbackChannel;

/// Feedback channel that writes notifications to the log.
///
/// Default adapter for hosts that have no notification surface wired.
pub struct LogFeedback;

#[async_trait]
impl FeedbackChannel for LogFeedback {
    async fn display_error(&self, message: &str) {
        log::error!("{message}");
    }

    async fn display_success(&self, message: &str) {
        log::info!("{message}");
    }
}
