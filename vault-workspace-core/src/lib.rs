//! Vault Workspace Core Library
//!
//! Provides the headless state layer of the vault password-manager front
//! end, including:
//! - Workspace state controller (filtering, sorting, multi-selection,
//!   route synchronization)
//! - Port traits for the extension background worker, the host router
//!   and the notification surface
//!
//! This library is platform-independent: hosts inject their own port
//! implementations and feed location changes and list snapshots in.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{WorkspaceError, WorkspaceResult};
pub use services::{ServiceContext, WorkspaceService};
pub use traits::{BackgroundPort, FeedbackChannel, Navigator};
