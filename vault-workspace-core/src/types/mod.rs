//! Type definitions

mod config;
mod filter;
mod resource;
mod route;
mod selection;
mod sorter;
mod workspace;

pub use config::WorkspaceConfig;
pub use filter::ResourceFilter;
pub use resource::{Favorite, Folder, Permission, Resource, Tag, PERMISSION_OWNER};
pub use route::{NavigationState, RouteParams, WorkspaceLocation, WorkspaceRoute};
pub use selection::Selection;
pub use sorter::{ResourceSorter, SortProperty};
pub use workspace::{DetailFocus, ViewState};
