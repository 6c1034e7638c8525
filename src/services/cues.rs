//! Phase-end cues and session toasts

use tokio::process::Command;
use tracing::{debug, info};

use crate::state::PhaseKind;

/// Message shown once the long break ends
pub const SESSION_FINISHED_TOAST: &str =
    "Congratulations, you've successfully completed a pomodoro session!";

/// Shell commands to run when a phase of each kind ends
#[derive(Debug, Clone, Default)]
pub struct CueConfig {
    pub work_cue: Option<String>,
    pub break_cue: Option<String>,
}

impl CueConfig {
    pub fn new(work_cue: Option<String>, break_cue: Option<String>) -> Self {
        Self { work_cue, break_cue }
    }

    /// Pick the cue for the phase kind that just completed
    pub fn cue_for(&self, kind: PhaseKind) -> Option<&str> {
        match kind {
            PhaseKind::Work => self.work_cue.as_deref(),
            PhaseKind::Break => self.break_cue.as_deref(),
        }
    }
}

/// Run a cue command through `sh -c` and wait for it to exit
pub async fn play_cue(command: &str) -> Result<(), String> {
    debug!("Running cue command: {}", command);

    let output = Command::new("sh")
        .args(["-c", command])
        .output()
        .await
        .map_err(|e| format!("Failed to execute cue command '{}': {}", command, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("Cue command '{}' failed: {}", command, stderr.trim()));
    }

    Ok(())
}

/// Show the session-finished toast
pub fn show_session_toast() {
    info!("{}", SESSION_FINISHED_TOAST);
}
