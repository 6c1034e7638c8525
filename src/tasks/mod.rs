//! Background tasks module
//! 
//! This module contains background tasks that run alongside the HTTP server.

pub mod tick;
pub mod notifications;

// Re-export main functions
pub use tick::tick_task;
pub use notifications::notification_task;
