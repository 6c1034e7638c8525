//! One-second tick source driving the timer

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Tick period of the countdown
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that ticks the timer once per second while it is running.
///
/// The interval is armed when a snapshot reports `running` and dropped as soon
/// as one reports otherwise, so pause, reset and the end of a session all
/// disarm it. Returns when the snapshot channel closes.
pub async fn tick_task(state: Arc<AppState>) {
    info!("Starting tick task");

    let mut updates = state.subscribe_updates();

    loop {
        if !updates.borrow_and_update().running {
            if updates.changed().await.is_err() {
                break;
            }
            continue;
        }

        debug!("Tick source armed");
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    // The timer itself ignores ticks that arrive after a pause
                    if let Err(e) = state.tick() {
                        error!("Failed to tick timer: {}", e);
                    }
                }

                changed = updates.changed() => {
                    if changed.is_err() {
                        info!("Timer updates closed, stopping tick task");
                        return;
                    }
                    if !updates.borrow_and_update().running {
                        debug!("Tick source disarmed");
                        break;
                    }
                }
            }
        }
    }

    info!("Tick task stopped");
}
