//! Event-channel adapters
//!
//! Bridge the navigator and feedback ports onto unbounded channels so a
//! host event loop can consume them as typed events.

use async_trait::async_trait;
use tokio::sync::mpsc;

use vault_workspace_core::error::{WorkspaceError, WorkspaceResult};
use vault_workspace_core::traits::{FeedbackChannel, Navigator};
use vault_workspace_core::types::NavigationState;

/// A navigation requested by the workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationEvent {
    /// Destination path
    pub path: String,
    /// Navigation state to hand back on the next location change
    pub state: Option<NavigationState>,
}

/// Navigator that forwards pushes onto an unbounded channel.
pub struct ChannelNavigator {
    sender: mpsc::UnboundedSender<NavigationEvent>,
}

impl ChannelNavigator {
    /// Creates the adapter together with its receiving end.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<NavigationEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl Navigator for ChannelNavigator {
    async fn push(&self, path: &str, state: Option<NavigationState>) -> WorkspaceResult<()> {
        self.sender
            .send(NavigationEvent {
                path: path.to_string(),
                state,
            })
            .map_err(|e| WorkspaceError::NavigationError(e.to_string()))
    }
}

/// A transient notification requested by the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackEvent {
    Error(String),
    Success(String),
}

/// Feedback channel that forwards notifications onto an unbounded
/// channel. Notifications are best-effort: a dropped receiver only
/// leaves a log line.
pub struct ChannelFeedback {
    sender: mpsc::UnboundedSender<FeedbackEvent>,
}

impl ChannelFeedback {
    /// Creates the adapter together with its receiving end.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<FeedbackEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl FeedbackChannel for ChannelFeedback {
    async fn display_error(&self, message: &str) {
        if self
            .sender
            .send(FeedbackEvent::Error(message.to_string()))
            .is_err()
        {
            log::warn!("Feedback receiver dropped, notification lost: {message}");
        }
    }

    async fn display_success(&self, message: &str) {
        if self
            .sender
            .send(FeedbackEvent::Success(message.to_string()))
            .is_err()
        {
            log::warn!("Feedback receiver dropped, notification lost: {message}");
        }
    }
}
