//! Workspace view state

use serde::{Deserialize, Serialize};

use super::{Folder, Resource, ResourceFilter, ResourceSorter, Selection};

/// What the detail side panel is focused on.
///
/// A resource and a folder can never be focused at the same time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
#[serde(rename_all = "camelCase")]
pub enum DetailFocus {
    /// Nothing focused
    #[default]
    None,
    /// A resource shown in the side panel
    Resource(Resource),
    /// A folder shown in the side panel
    Folder(Folder),
}

impl DetailFocus {
    #[must_use]
    pub fn resource(&self) -> Option<&Resource> {
        match self {
            Self::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    #[must_use]
    pub fn folder(&self) -> Option<&Folder> {
        match self {
            Self::Folder(folder) => Some(folder),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// The whole workspace view state.
///
/// Handlers build the next value and install it in a single assignment,
/// so filter, sort order, selection and detail focus can never be
/// observed mid-update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Active search filter
    pub filter: ResourceFilter,
    /// Resources matching the active filter, in sort order
    pub filtered_resources: Vec<Resource>,
    /// Sort order over the filtered list
    pub sorter: ResourceSorter,
    /// Current multi-selection
    pub selection: Selection,
    /// Detail side panel focus
    pub details: DetailFocus,
    /// Whether the detail panel stays open
    pub details_locked: bool,
    /// Resource id pending a scroll-into-view, cleared on consumption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_target: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: ResourceFilter::default(),
            filtered_resources: Vec::new(),
            sorter: ResourceSorter::default(),
            selection: Selection::new(),
            details: DetailFocus::default(),
            details_locked: true,
            scroll_target: None,
        }
    }
}
