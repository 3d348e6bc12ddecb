//! Platform-agnostic application bootstrap for the vault workspace.
//!
//! Provides `AppState` (the shared workspace handle), `AppStateBuilder`
//! (port injection), and ready-made port adapters for host event loops.

pub mod adapters;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use vault_workspace_core::error::{WorkspaceError, WorkspaceResult};
use vault_workspace_core::services::{ServiceContext, WorkspaceService};
use vault_workspace_core::traits::{BackgroundPort, FeedbackChannel, Navigator};
use vault_workspace_core::types::WorkspaceConfig;

use crate::adapters::LogFeedback;

/// Platform-agnostic application state.
///
/// Holds the service context and the single-writer workspace service
/// behind an async lock. Every frontend constructs this once at startup
/// via `AppStateBuilder`.
pub struct AppState {
    /// Service context (holds the injected host ports)
    pub ctx: Arc<ServiceContext>,
    /// Workspace state controller
    pub workspace: RwLock<WorkspaceService>,
    /// Whether the initial populate has been requested
    pub populated: AtomicBool,
}

impl AppState {
    /// Runs the startup sequence: request the initial local-storage
    /// refreshes so the background worker pushes fresh lists.
    pub async fn run_startup(&self) {
        self.workspace.read().await.populate().await;
        self.populated.store(true, Ordering::SeqCst);
        log::info!("Workspace startup complete");
    }
}

/// Builder for constructing `AppState` with host-specific ports.
///
/// # Required ports
/// - `background_port` — request channel to the extension background worker
/// - `navigator` — router/history abstraction
///
/// # Optional
/// - `feedback` — defaults to [`LogFeedback`]
/// - `config` — defaults to [`WorkspaceConfig::default`]
pub struct AppStateBuilder {
    background_port: Option<Arc<dyn BackgroundPort>>,
    navigator: Option<Arc<dyn Navigator>>,
    feedback: Option<Arc<dyn FeedbackChannel>>,
    config: WorkspaceConfig,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            background_port: None,
            navigator: None,
            feedback: None,
            config: WorkspaceConfig::default(),
        }
    }

    #[must_use]
    pub fn background_port(mut self, port: Arc<dyn BackgroundPort>) -> Self {
        self.background_port = Some(port);
        self
    }

    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    #[must_use]
    pub fn feedback(mut self, feedback: Arc<dyn FeedbackChannel>) -> Self {
        self.feedback = Some(feedback);
        self
    }

    #[must_use]
    pub fn config(mut self, config: WorkspaceConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `WorkspaceError::ValidationError` if required ports are
    /// missing.
    pub fn build(self) -> WorkspaceResult<AppState> {
        let background_port = self.background_port.ok_or_else(|| {
            WorkspaceError::ValidationError("background_port is required".to_string())
        })?;
        let navigator = self
            .navigator
            .ok_or_else(|| WorkspaceError::ValidationError("navigator is required".to_string()))?;
        let feedback = self.feedback.unwrap_or_else(|| Arc::new(LogFeedback));

        let ctx = Arc::new(ServiceContext::new(background_port, navigator, feedback));
        let workspace = WorkspaceService::new(Arc::clone(&ctx), self.config);

        Ok(AppState {
            ctx,
            workspace: RwLock::new(workspace),
            populated: AtomicBool::new(false),
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
