//! Router surface consumed by the workspace
//!
//! The host shell owns the actual router; the workspace only sees the
//! current location, the parameters matched out of it, and a typed
//! builder for the paths it navigates to.

use serde::{Deserialize, Serialize};

use super::ResourceFilter;

/// Current router location, as supplied by the host shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceLocation {
    /// Path component, e.g. `/app/passwords`
    pub pathname: String,
    /// Opaque key, changes on every navigation
    pub key: String,
    /// Filter carried as navigation state, when any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ResourceFilter>,
}

impl WorkspaceLocation {
    /// Whether this location belongs to the passwords workspace.
    #[must_use]
    pub fn is_passwords_route(&self) -> bool {
        self.pathname.contains("passwords")
    }
}

/// Parameters matched out of the current route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    /// Folder id of a folder view route
    pub filter_by_folder_id: Option<String>,
    /// Resource id of a password detail route
    pub selected_resource_id: Option<String>,
}

/// Workspace routes the controller navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceRoute {
    /// The passwords list
    Passwords,
    /// A password detail view
    PasswordView { resource_id: String },
    /// A folder view
    FolderView { folder_id: String },
}

impl WorkspaceRoute {
    /// Renders the route path under the given base, e.g. `/app`.
    #[must_use]
    pub fn to_path(&self, base: &str) -> String {
        match self {
            Self::Passwords => format!("{base}/passwords"),
            Self::PasswordView { resource_id } => format!("{base}/passwords/view/{resource_id}"),
            Self::FolderView { folder_id } => format!("{base}/folders/view/{folder_id}"),
        }
    }
}

/// State attached to a navigation, read back on the next location change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Filter the destination view should apply
    pub filter: ResourceFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_under_the_base_path() {
        assert_eq!(WorkspaceRoute::Passwords.to_path("/app"), "/app/passwords");
        assert_eq!(
            WorkspaceRoute::PasswordView {
                resource_id: "r-1".to_string()
            }
            .to_path("/app"),
            "/app/passwords/view/r-1"
        );
        assert_eq!(
            WorkspaceRoute::FolderView {
                folder_id: "f-1".to_string()
            }
            .to_path("/app"),
            "/app/folders/view/f-1"
        );
    }

    #[test]
    fn passwords_route_detection_matches_detail_views_too() {
        let list = WorkspaceLocation {
            pathname: "/app/passwords".to_string(),
            key: "k1".to_string(),
            filter: None,
        };
        let detail = WorkspaceLocation {
            pathname: "/app/passwords/view/r-1".to_string(),
            key: "k2".to_string(),
            filter: None,
        };
        let folders = WorkspaceLocation {
            pathname: "/app/folders/view/f-1".to_string(),
            key: "k3".to_string(),
            filter: None,
        };
        assert!(list.is_passwords_route());
        assert!(detail.is_passwords_route());
        assert!(!folders.is_passwords_route());
    }
}
