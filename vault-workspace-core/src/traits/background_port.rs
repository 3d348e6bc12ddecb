//! Background worker port abstraction

use async_trait::async_trait;

use crate::error::WorkspaceResult;

/// Wire message asking the worker to refresh its local folder storage.
pub const FOLDERS_UPDATE_LOCAL_STORAGE: &str = "passbolt.folders.update-local-storage";

/// Wire message asking the worker to refresh its local resource storage.
pub const RESOURCES_UPDATE_LOCAL_STORAGE: &str = "passbolt.resources.update-local-storage";

/// Request channel to the extension background worker.
///
/// Refresh requests are fire-and-forget from the workspace's point of
/// view: no payload comes back on the call itself. The refreshed lists
/// arrive later as change notifications the host feeds into
/// `WorkspaceService::handle_resources_changed` /
/// `handle_folders_changed`.
#[async_trait]
pub trait BackgroundPort: Send + Sync {
    /// Asks the worker to refresh its local folder storage
    /// ([`FOLDERS_UPDATE_LOCAL_STORAGE`]).
    async fn refresh_folders(&self) -> WorkspaceResult<()>;

    /// Asks the worker to refresh its local resource storage
    /// ([`RESOURCES_UPDATE_LOCAL_STORAGE`]).
    async fn refresh_resources(&self) -> WorkspaceResult<()>;
}
