//! Test helper module
//!
//! Provides recording mock ports and entity factory methods.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{WorkspaceError, WorkspaceResult};
use crate::services::ServiceContext;
use crate::traits::{
    BackgroundPort, FeedbackChannel, Navigator, FOLDERS_UPDATE_LOCAL_STORAGE,
    RESOURCES_UPDATE_LOCAL_STORAGE,
};
use crate::types::{
    Folder, NavigationState, Permission, Resource, Tag, WorkspaceLocation,
};

// ===== MockBackgroundPort =====

pub struct MockBackgroundPort {
    /// Wire messages requested, in order
    pub requests: RwLock<Vec<String>>,
    /// When `true`, `refresh_resources` fails with a port error
    pub fail_resources: RwLock<bool>,
}

impl MockBackgroundPort {
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(Vec::new()),
            fail_resources: RwLock::new(false),
        }
    }
}

#[async_trait]
impl BackgroundPort for MockBackgroundPort {
    async fn refresh_folders(&self) -> WorkspaceResult<()> {
        self.requests
            .write()
            .await
            .push(FOLDERS_UPDATE_LOCAL_STORAGE.to_string());
        Ok(())
    }

    async fn refresh_resources(&self) -> WorkspaceResult<()> {
        if *self.fail_resources.read().await {
            return Err(WorkspaceError::PortError("port disconnected".to_string()));
        }
        self.requests
            .write()
            .await
            .push(RESOURCES_UPDATE_LOCAL_STORAGE.to_string());
        Ok(())
    }
}

// ===== MockNavigator =====

/// One recorded `push` call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPush {
    pub path: String,
    pub state: Option<NavigationState>,
}

pub struct MockNavigator {
    /// Pushed locations, in order
    pub pushes: RwLock<Vec<RecordedPush>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self {
            pushes: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Navigator for MockNavigator {
    async fn push(&self, path: &str, state: Option<NavigationState>) -> WorkspaceResult<()> {
        self.pushes.write().await.push(RecordedPush {
            path: path.to_string(),
            state,
        });
        Ok(())
    }
}

// ===== MockFeedback =====

pub struct MockFeedback {
    pub errors: RwLock<Vec<String>>,
}

impl MockFeedback {
    pub fn new() -> Self {
        Self {
            errors: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl FeedbackChannel for MockFeedback {
    async fn display_error(&self, message: &str) {
        self.errors.write().await.push(message.to_string());
    }

    async fn display_success(&self, _message: &str) {}
}

// ===== Factory methods =====

/// Creates a test `ServiceContext` wired to recording mocks.
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockBackgroundPort>,
    Arc<MockNavigator>,
    Arc<MockFeedback>,
) {
    let port = Arc::new(MockBackgroundPort::new());
    let navigator = Arc::new(MockNavigator::new());
    let feedback = Arc::new(MockFeedback::new());

    let ctx = Arc::new(ServiceContext::new(
        port.clone(),
        navigator.clone(),
        feedback.clone(),
    ));

    (ctx, port, navigator, feedback)
}

/// Creates a resource owned by the current user, with a fresh id.
pub fn test_resource(name: &str) -> Resource {
    Resource {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        username: None,
        uri: None,
        description: None,
        folder_parent_id: None,
        tags: Vec::new(),
        permission: Permission::owner(),
        favorite: None,
        created: Utc::now(),
        modified: Utc::now(),
    }
}

/// Creates a root-level folder with a fresh id.
pub fn test_folder(name: &str) -> Folder {
    Folder {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_string(),
        folder_parent_id: None,
    }
}

/// Creates a personal tag with a fresh id.
pub fn test_tag(slug: &str) -> Tag {
    Tag {
        id: uuid::Uuid::new_v4().to_string(),
        slug: slug.to_string(),
        is_shared: false,
    }
}

/// Creates a location with no navigation state attached.
pub fn location(pathname: &str, key: &str) -> WorkspaceLocation {
    WorkspaceLocation {
        pathname: pathname.to_string(),
        key: key.to_string(),
        filter: None,
    }
}
