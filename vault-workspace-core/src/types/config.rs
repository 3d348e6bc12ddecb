//! Workspace configuration

use serde::{Deserialize, Serialize};

/// Workspace configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConfig {
    /// Base path every workspace route is rendered under
    pub route_base: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            route_base: "/app".to_string(),
        }
    }
}
