//! Resource, folder and tag type definitions
//!
//! These mirror what the background worker keeps in its local storage.
//! The workspace holds read-only cached copies; it never creates or
//! mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Owner-level access (full control, including share and delete).
pub const PERMISSION_OWNER: i32 = 15;

/// Access level the current user holds on a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Access level; `15` is owner.
    #[serde(rename = "type")]
    pub permission_type: i32,
}

impl Permission {
    /// Owner permission.
    #[must_use]
    pub fn owner() -> Self {
        Self {
            permission_type: PERMISSION_OWNER,
        }
    }

    /// Whether this permission grants owner-level access.
    #[must_use]
    pub fn is_owner(&self) -> bool {
        self.permission_type == PERMISSION_OWNER
    }
}

/// Favorite marker. Presence on a resource marks it as a favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Favorite entry id
    pub id: String,
}

/// Label attachable to resources, shared or personal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag id
    pub id: String,
    /// URL-safe tag name, matched by the text search
    pub slug: String,
    /// Whether the tag is shared with other users
    #[serde(default)]
    pub is_shared: bool,
}

/// A password/secret record managed by the extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique, stable resource id
    pub id: String,
    /// Resource name
    pub name: String,
    /// Login associated with the secret
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// URI the secret applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Containing folder, absent for root-level resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_parent_id: Option<String>,
    /// Tags attached to the resource, in display order
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Access level the current user holds
    pub permission: Permission,
    /// Favorite marker, absent when not a favorite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<Favorite>,
    /// Creation time
    #[serde(with = "crate::utils::datetime")]
    pub created: DateTime<Utc>,
    /// Last modification time
    #[serde(with = "crate::utils::datetime")]
    pub modified: DateTime<Utc>,
}

/// Hierarchical container for resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Folder id
    pub id: String,
    /// Folder name
    pub name: String,
    /// Parent folder, absent for root-level folders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_parent_id: Option<String>,
}
