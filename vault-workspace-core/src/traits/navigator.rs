//! Router/history abstraction

use async_trait::async_trait;

use crate::error::WorkspaceResult;
use crate::types::NavigationState;

/// Router/history abstraction owned by the host shell.
///
/// The workspace never inspects history; it only pushes new locations.
/// Location changes come back through
/// `WorkspaceService::handle_route_change`.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Pushes a new location, optionally carrying navigation state.
    async fn push(&self, path: &str, state: Option<NavigationState>) -> WorkspaceResult<()>;
}
