//! Main application state management

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info};

use crate::error::AppError;
use super::{Settings, TickOutcome, TimerEvent, TimerSnapshot, TimerState};

/// Main application state that owns the timer and its collaborators' channels
#[derive(Debug)]
pub struct AppState {
    /// The pomodoro state machine. Ticks and commands take this lock in turn.
    pub timer_state: Arc<Mutex<TimerState>>,
    /// Settings provider; the timer resets whenever its value changes
    pub settings_tx: watch::Sender<Settings>,
    /// Lifecycle events for the notification task
    pub event_tx: broadcast::Sender<TimerEvent>,
    /// Latest timer snapshot, also used to arm and disarm the tick task
    pub timer_update_tx: watch::Sender<TimerSnapshot>,
    /// Every published snapshot in order, including the momentary `Finished` one
    pub snapshot_tx: broadcast::Sender<TimerSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _timer_update_rx: watch::Receiver<TimerSnapshot>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Whether developer-only commands are exposed
    pub dev_mode: bool,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    /// Create a new AppState with a paused timer at the start of a session
    pub fn new(port: u16, host: String, settings: Settings, dev_mode: bool) -> Self {
        let timer = TimerState::new(settings);
        let (settings_tx, _) = watch::channel(settings);
        let (event_tx, _) = broadcast::channel(100);
        let (timer_update_tx, timer_update_rx) = watch::channel(timer.snapshot());
        let (snapshot_tx, _) = broadcast::channel(256);

        Self {
            timer_state: Arc::new(Mutex::new(timer)),
            settings_tx,
            event_tx,
            timer_update_tx,
            snapshot_tx,
            _timer_update_rx: timer_update_rx,
            start_time: Instant::now(),
            port,
            host,
            dev_mode,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    fn lock_timer(&self) -> Result<MutexGuard<'_, TimerState>, AppError> {
        self.timer_state
            .lock()
            .map_err(|_| AppError::LockPoisoned("timer state"))
    }

    /// Lock the timer, pick up any settings change, then apply a command.
    ///
    /// The resulting snapshot is published before the lock is released so
    /// watchers never see snapshots out of order.
    fn apply_command<F>(&self, action: &str, command: F) -> Result<TimerSnapshot, AppError>
    where
        F: FnOnce(&mut TimerState),
    {
        let mut timer = self.lock_timer()?;
        let settings = *self.settings_tx.borrow();
        timer.observe_settings(&settings);
        command(&mut *timer);
        let snapshot = timer.snapshot();
        self.publish(snapshot.clone());
        drop(timer); // Release the lock early

        self.record_action(action);
        Ok(snapshot)
    }

    /// Hand a snapshot to both the latest-value watch and the ordered stream
    fn publish(&self, snapshot: TimerSnapshot) {
        // Nobody listening to the stream is fine
        let _ = self.snapshot_tx.send(snapshot.clone());
        self.timer_update_tx.send_replace(snapshot);
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Start or resume the countdown
    pub fn start(&self) -> Result<TimerSnapshot, AppError> {
        self.apply_command("start", |timer| {
            if timer.start() {
                info!("Timer started in {} with {} left", timer.phase(), timer.format_remaining());
            }
        })
    }

    /// Pause the countdown
    pub fn pause(&self) -> Result<TimerSnapshot, AppError> {
        self.apply_command("pause", |timer| {
            if timer.pause() {
                info!("Timer paused in {} with {} left", timer.phase(), timer.format_remaining());
            }
        })
    }

    /// Shared run/pause control of the settings provider
    pub fn set_running(&self, running: bool) -> Result<TimerSnapshot, AppError> {
        if running {
            self.start()
        } else {
            self.pause()
        }
    }

    /// Reset back to the first work round, paused
    pub fn reset(&self) -> Result<TimerSnapshot, AppError> {
        self.apply_command("reset", |timer| {
            timer.reset();
            info!("Timer reset");
        })
    }

    /// Jump to the last second of the current phase (developer aid)
    pub fn skip(&self) -> Result<TimerSnapshot, AppError> {
        self.apply_command("skip", |timer| {
            timer.skip_to_final_second();
            info!("Skipped to the final second of {}", timer.phase());
        })
    }

    /// Advance the timer by one second and hand any events to the notification side
    pub fn tick(&self) -> Result<TickOutcome, AppError> {
        let mut timer = self.lock_timer()?;
        let settings = *self.settings_tx.borrow();
        timer.observe_settings(&settings);
        let outcome = timer.tick();
        if let Some(finished) = &outcome.finished_snapshot {
            self.publish(finished.clone());
        }
        self.publish(timer.snapshot());
        drop(timer);

        for event in &outcome.events {
            debug!("Publishing timer event: {:?}", event);
            // No subscribers is fine; notifications are best-effort
            if self.event_tx.send(*event).is_err() {
                debug!("No notification listeners for {:?}", event);
            }
        }

        Ok(outcome)
    }

    /// Current settings as seen by the provider
    pub fn get_settings(&self) -> Settings {
        *self.settings_tx.borrow()
    }

    /// Replace the settings. The timer resets if they differ from the current ones.
    pub fn update_settings(&self, settings: Settings) -> Result<TimerSnapshot, AppError> {
        settings.validate()?;
        let previous = self.settings_tx.send_replace(settings);
        if previous != settings {
            info!("Settings updated: {:?}", settings);
        } else {
            debug!("Settings unchanged");
        }
        self.apply_command("settings", |_| {})
    }

    /// Get current timer snapshot, picking up pending settings changes first
    pub fn get_timer_snapshot(&self) -> Result<TimerSnapshot, AppError> {
        let mut timer = self.lock_timer()?;
        let settings = *self.settings_tx.borrow();
        if timer.observe_settings(&settings) {
            self.publish(timer.snapshot());
        }
        Ok(timer.snapshot())
    }

    /// Subscribe to lifecycle events
    pub fn subscribe_events(&self) -> broadcast::Receiver<TimerEvent> {
        self.event_tx.subscribe()
    }

    /// Subscribe to the latest timer snapshot
    pub fn subscribe_updates(&self) -> watch::Receiver<TimerSnapshot> {
        self.timer_update_tx.subscribe()
    }

    /// Subscribe to every timer snapshot as it is published
    pub fn subscribe_snapshots(&self) -> broadcast::Receiver<TimerSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
