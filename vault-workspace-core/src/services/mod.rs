//! Workspace service layer

mod workspace_service;

pub use workspace_service::WorkspaceService;

use std::sync::Arc;

use crate::traits::{BackgroundPort, FeedbackChannel, Navigator};

/// Service context - holds the injected host ports.
///
/// The platform layer creates this once and injects its own port
/// implementations (extension glue, router bridge, notification surface).
pub struct ServiceContext {
    /// Request channel to the extension background worker
    pub background_port: Arc<dyn BackgroundPort>,
    /// Router/history abstraction
    pub navigator: Arc<dyn Navigator>,
    /// Transient user notifications
    pub feedback: Arc<dyn FeedbackChannel>,
}

impl ServiceContext {
    /// Creates the service context.
    #[must_use]
    pub fn new(
        background_port: Arc<dyn BackgroundPort>,
        navigator: Arc<dyn Navigator>,
        feedback: Arc<dyn FeedbackChannel>,
    ) -> Self {
        Self {
            background_port,
            navigator,
            feedback,
        }
    }
}
