//! Host port abstraction trait definitions

mod background_port;
mod feedback;
mod navigator;

pub use background_port::{
    BackgroundPort, FOLDERS_UPDATE_LOCAL_STORAGE, RESOURCES_UPDATE_LOCAL_STORAGE,
};
pub use feedback::FeedbackChannel;
pub use navigator::Navigator;
