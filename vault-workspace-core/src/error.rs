//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Workspace layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum WorkspaceError {
    /// A route referenced a resource id absent from the cached list
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// A route referenced a folder id absent from the cached list
    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    /// The background worker rejected or dropped a request
    #[error("Background port error: {0}")]
    PortError(String),

    /// The host router rejected a navigation
    #[error("Navigation error: {0}")]
    NavigationError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl WorkspaceError {
    /// Whether this is expected behavior (stale route, user input, etc.),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::ResourceNotFound(_) | Self::FolderNotFound(_) | Self::ValidationError(_)
        )
    }
}

/// Workspace layer Result type alias
pub type WorkspaceResult<T> = std::result::Result<T, WorkspaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_references_are_expected() {
        assert!(WorkspaceError::ResourceNotFound("r-1".to_string()).is_expected());
        assert!(WorkspaceError::FolderNotFound("f-1".to_string()).is_expected());
        assert!(!WorkspaceError::PortError("disconnected".to_string()).is_expected());
        assert!(!WorkspaceError::NavigationError("closed".to_string()).is_expected());
    }

    #[test]
    fn errors_serialize_with_code_and_details() {
        let err = WorkspaceError::ResourceNotFound("r-1".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "ResourceNotFound");
        assert_eq!(json["details"], "r-1");
    }
}
