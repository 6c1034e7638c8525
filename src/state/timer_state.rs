//! Pomodoro timer state machine
//!
//! `TimerState` owns the phase, remaining time and round count. It is mutated
//! only by `tick` and the command methods; every mutation returns the events it
//! produced instead of talking to the notification side directly.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::{Phase, PhaseKind, Settings};

/// Shortest phase the timer will ever count down from
pub const MIN_PHASE_MINUTES: u32 = 1;

/// Lifecycle events raised for the notification collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TimerEvent {
    /// The last second of a phase just elapsed
    PhaseEnding { completed: PhaseKind },
    /// The long break ended and the cycle is complete
    SessionFinished,
}

/// Read-only view of the timer for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub phase: Phase,
    pub label: String,
    pub minutes_remaining: u32,
    pub seconds_remaining: u32,
    pub remaining: String,
    pub rounds_left: u32,
    pub progress: f64,
    pub running: bool,
    /// Reset would not change anything
    pub pristine: bool,
}

/// Everything a single tick produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub events: Vec<TimerEvent>,
    /// The momentary `Finished` state, captured before the timer reset itself
    pub finished_snapshot: Option<TimerSnapshot>,
}

impl TickOutcome {
    /// Nothing happened besides (possibly) a countdown step
    pub fn is_quiet(&self) -> bool {
        self.events.is_empty() && self.finished_snapshot.is_none()
    }
}

/// Timer state for one pomodoro session
#[derive(Debug, Clone, PartialEq)]
pub struct TimerState {
    phase: Phase,
    minutes_remaining: u32,
    seconds_remaining: u32,
    rounds_left: u32,
    running: bool,
    /// Settings this state was built from
    settings: Settings,
}

impl TimerState {
    /// Create a paused timer at the start of the first work round
    pub fn new(settings: Settings) -> Self {
        let mut state = Self {
            phase: Phase::Work,
            minutes_remaining: 0,
            seconds_remaining: 0,
            rounds_left: 0,
            running: false,
            settings,
        };
        state.reset();
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn minutes_remaining(&self) -> u32 {
        self.minutes_remaining
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn rounds_left(&self) -> u32 {
        self.rounds_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Remaining time of the current phase in seconds
    pub fn remaining_seconds(&self) -> u64 {
        u64::from(self.minutes_remaining) * 60 + u64::from(self.seconds_remaining)
    }

    /// Percentage of the current phase that has elapsed, in `[0, 100]`
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.phase == Phase::Finished {
            return 100.0;
        }
        let total = u64::from(self.phase_minutes(self.phase)) * 60;
        let elapsed = total.saturating_sub(self.remaining_seconds());
        (100.0 * elapsed as f64 / total as f64).clamp(0.0, 100.0)
    }

    /// True when the timer sits exactly where `reset` would put it
    pub fn is_pristine(&self) -> bool {
        self.phase == Phase::Work
            && self.minutes_remaining == self.phase_minutes(Phase::Work)
            && self.seconds_remaining == 0
            && self.rounds_left == self.settings.total_rounds
    }

    /// Remaining time formatted as MM:SS
    pub fn format_remaining(&self) -> String {
        format!("{:02}:{:02}", self.minutes_remaining, self.seconds_remaining)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            phase: self.phase,
            label: self.phase.label().to_string(),
            minutes_remaining: self.minutes_remaining,
            seconds_remaining: self.seconds_remaining,
            remaining: self.format_remaining(),
            rounds_left: self.rounds_left,
            progress: self.progress(),
            running: self.running,
            pristine: self.is_pristine(),
        }
    }

    /// Compare against the provider's current settings and reset on any change.
    ///
    /// Returns true if a reset happened.
    pub fn observe_settings(&mut self, settings: &Settings) -> bool {
        if self.settings == *settings {
            return false;
        }
        info!("Settings changed from {:?} to {:?}, resetting timer", self.settings, settings);
        self.settings = *settings;
        self.reset();
        true
    }

    /// Start counting down. Returns true if the timer was not already running.
    pub fn start(&mut self) -> bool {
        if self.running || self.phase == Phase::Finished {
            return false;
        }
        self.running = true;
        true
    }

    /// Stop counting down. Returns true if the timer was running.
    pub fn pause(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    /// Go back to the first work round, paused
    pub fn reset(&mut self) {
        self.running = false;
        self.phase = Phase::Work;
        self.rounds_left = self.settings.total_rounds;
        self.minutes_remaining = self.phase_minutes(Phase::Work);
        self.seconds_remaining = 0;
    }

    /// Jump to the final second of the current phase
    pub fn skip_to_final_second(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        self.minutes_remaining = 0;
        self.seconds_remaining = 1;
    }

    /// Advance the countdown by one second.
    ///
    /// A no-op while paused, so a tick that was already in flight when the
    /// timer got paused changes nothing.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if !self.running {
            return outcome;
        }

        if self.is_expired() {
            self.expire(&mut outcome);
            return outcome;
        }

        if self.seconds_remaining == 0 {
            self.minutes_remaining -= 1;
            self.seconds_remaining = 59;
        } else {
            self.seconds_remaining -= 1;
        }
        debug!("Tick: {} {} left", self.phase, self.format_remaining());

        // 00:00 must never be observable: announce the ending and move on now
        if self.is_expired() {
            if let Some(kind) = self.phase.kind() {
                outcome.events.push(TimerEvent::PhaseEnding { completed: kind });
            }
            self.expire(&mut outcome);
        }

        outcome
    }

    fn is_expired(&self) -> bool {
        self.minutes_remaining == 0 && self.seconds_remaining == 0
    }

    fn expire(&mut self, outcome: &mut TickOutcome) {
        let transition = self.phase.transition(self.rounds_left);
        info!(
            "{} ended, moving to {} ({} rounds left)",
            self.phase, transition.next, transition.rounds_left
        );
        self.rounds_left = transition.rounds_left;
        if transition.session_finished {
            outcome.events.push(TimerEvent::SessionFinished);
        }
        self.enter(transition.next, outcome);
    }

    fn enter(&mut self, phase: Phase, outcome: &mut TickOutcome) {
        self.phase = phase;
        self.seconds_remaining = 0;

        if phase == Phase::Finished {
            self.minutes_remaining = 0;
            self.running = false;
            outcome.finished_snapshot = Some(self.snapshot());
            info!("Session finished, resetting timer");
            self.reset();
            return;
        }

        let minutes = self.settings.minutes_for(phase);
        if minutes == 0 {
            error!("{} is configured with a zero duration, falling back to reset", phase);
            self.reset();
            return;
        }
        self.minutes_remaining = minutes;
    }

    /// Configured minutes for a phase, never below the minimum
    fn phase_minutes(&self, phase: Phase) -> u32 {
        self.settings.minutes_for(phase).max(MIN_PHASE_MINUTES)
    }
}
