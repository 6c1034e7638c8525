//! Pomodoro Timer - a work/break interval timer served over HTTP
//! 
//! This library provides the pomodoro state machine, the background tasks
//! that drive it and report on it, and the HTTP API used to control it.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, SettingsError};
pub use state::{AppState, Phase, Settings, TimerEvent, TimerState};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
