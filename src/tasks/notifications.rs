//! Notification collaborator task

use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::{
    services::{play_cue, show_session_toast, CueConfig},
    state::{AppState, TimerEvent},
};

/// Background task that turns timer events into cues and toasts.
///
/// Cues run on their own tasks so a slow command never holds up the next
/// event. Failures are logged and otherwise ignored.
pub async fn notification_task(state: Arc<AppState>, cues: CueConfig) {
    info!("Starting notification task");

    let mut events = state.subscribe_events();

    loop {
        match events.recv().await {
            Ok(TimerEvent::PhaseEnding { completed }) => {
                debug!("Phase ending: {:?}", completed);
                let Some(command) = cues.cue_for(completed) else {
                    continue;
                };
                let command = command.to_string();
                tokio::spawn(async move {
                    if let Err(e) = play_cue(&command).await {
                        warn!("Cue playback failed: {}", e);
                    }
                });
            }
            Ok(TimerEvent::SessionFinished) => show_session_toast(),
            Err(RecvError::Lagged(skipped)) => {
                warn!("Notification task lagged, dropped {} events", skipped);
            }
            Err(RecvError::Closed) => {
                info!("Event channel closed, stopping notification task");
                break;
            }
        }
    }
}
