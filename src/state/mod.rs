//! State management module
//! 
//! This module contains the pomodoro state machine, its settings and the
//! shared application state that serializes access to it.

pub mod phase;
pub mod settings;
pub mod timer_state;
pub mod app_state;

// Re-export main types
pub use phase::{Phase, PhaseKind, Transition};
pub use settings::Settings;
pub use timer_state::{TickOutcome, TimerEvent, TimerSnapshot, TimerState};
pub use app_state::AppState;
