//! Timer settings supplied by the settings provider

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use super::Phase;

/// Default work duration in minutes
pub const DEFAULT_WORK_MINUTES: u32 = 25;
/// Default short break duration in minutes
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
/// Default long break duration in minutes
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;
/// Default number of work rounds before the long break
pub const DEFAULT_ROUNDS: u32 = 4;
/// Longest accepted phase duration in minutes (one day)
pub const MAX_PHASE_MINUTES: u32 = 24 * 60;

/// Durations (minutes) and round count for one pomodoro cycle.
///
/// Equality is the identity the timer compares against: any difference from
/// the settings a `TimerState` was built with forces a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub work_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    pub total_rounds: u32,
}

impl Settings {
    /// Build validated settings
    pub fn new(
        work_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
        total_rounds: u32,
    ) -> Result<Self, SettingsError> {
        let settings = Self {
            work_minutes,
            short_break_minutes,
            long_break_minutes,
            total_rounds,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every duration is within bounds and the round count is positive
    pub fn validate(&self) -> Result<(), SettingsError> {
        let durations = [
            ("work_minutes", self.work_minutes),
            ("short_break_minutes", self.short_break_minutes),
            ("long_break_minutes", self.long_break_minutes),
        ];
        for (field, minutes) in durations {
            if minutes == 0 {
                return Err(SettingsError::ZeroDuration { field });
            }
            if minutes > MAX_PHASE_MINUTES {
                return Err(SettingsError::DurationTooLong { field, max: MAX_PHASE_MINUTES });
            }
        }
        if self.total_rounds == 0 {
            return Err(SettingsError::ZeroRounds);
        }
        Ok(())
    }

    /// Configured length of a phase in minutes. `Finished` has no duration.
    pub fn minutes_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Work => self.work_minutes,
            Phase::ShortBreak => self.short_break_minutes,
            Phase::LongBreak => self.long_break_minutes,
            Phase::Finished => 0,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            total_rounds: DEFAULT_ROUNDS,
        }
    }
}
