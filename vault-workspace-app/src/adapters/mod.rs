//! Ready-made port adapters
//!
//! Hosts with a real extension port and router implement the core traits
//! directly; the adapters here cover the common embedding cases.

mod channel;
mod log_feedback;

pub use channel::{ChannelFeedback, ChannelNavigator, FeedbackEvent, NavigationEvent};
pub use log_feedback::LogFeedback;
