//! External collaborator module
//! 
//! This module contains the side effects the timer delegates: running cue
//! commands and showing the session-finished toast.

pub mod cues;

// Re-export main functions
pub use cues::*;
