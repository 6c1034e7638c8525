//! Pomodoro phases and the transition table between them

use serde::{Deserialize, Serialize};

/// One segment of the pomodoro cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
    /// Transient end-of-session marker; the timer resets itself right after entering it
    Finished,
}

/// Coarse classification used to pick a notification cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseKind {
    Work,
    Break,
}

/// Outcome of a phase expiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: Phase,
    pub rounds_left: u32,
    /// The whole session (all rounds plus the long break) is done
    pub session_finished: bool,
}

impl Phase {
    /// Human readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::ShortBreak => "Short break",
            Phase::LongBreak => "Long break",
            Phase::Finished => "Finished",
        }
    }

    /// Kind of phase for cue selection. `Finished` never ends on a tick and has no kind.
    pub fn kind(&self) -> Option<PhaseKind> {
        match self {
            Phase::Work => Some(PhaseKind::Work),
            Phase::ShortBreak | Phase::LongBreak => Some(PhaseKind::Break),
            Phase::Finished => None,
        }
    }

    /// Compute the phase that follows this one once its time runs out.
    ///
    /// `Finished` is terminal and maps onto itself; only a reset leaves it.
    pub fn transition(self, rounds_left: u32) -> Transition {
        match self {
            Phase::Work => match rounds_left {
                0 => Transition {
                    next: Phase::Finished,
                    rounds_left,
                    session_finished: false,
                },
                1 => Transition {
                    next: Phase::LongBreak,
                    rounds_left: 0,
                    session_finished: false,
                },
                _ => Transition {
                    next: Phase::ShortBreak,
                    rounds_left,
                    session_finished: false,
                },
            },
            Phase::ShortBreak => Transition {
                next: Phase::Work,
                rounds_left: rounds_left.saturating_sub(1),
                session_finished: false,
            },
            Phase::LongBreak => Transition {
                next: Phase::Finished,
                rounds_left: rounds_left.saturating_sub(1),
                session_finished: true,
            },
            Phase::Finished => Transition {
                next: Phase::Finished,
                rounds_left,
                session_finished: false,
            },
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_goes_to_short_break_while_rounds_remain() {
        let t = Phase::Work.transition(3);
        assert_eq!(t.next, Phase::ShortBreak);
        assert_eq!(t.rounds_left, 3);
        assert!(!t.session_finished);
    }

    #[test]
    fn last_work_round_goes_to_long_break() {
        let t = Phase::Work.transition(1);
        assert_eq!(t.next, Phase::LongBreak);
        assert_eq!(t.rounds_left, 0);
    }

    #[test]
    fn work_without_rounds_finishes() {
        let t = Phase::Work.transition(0);
        assert_eq!(t.next, Phase::Finished);
        assert_eq!(t.rounds_left, 0);
        assert!(!t.session_finished);
    }

    #[test]
    fn short_break_consumes_a_round() {
        let t = Phase::ShortBreak.transition(3);
        assert_eq!(t.next, Phase::Work);
        assert_eq!(t.rounds_left, 2);
    }

    #[test]
    fn long_break_finishes_session() {
        let t = Phase::LongBreak.transition(0);
        assert_eq!(t.next, Phase::Finished);
        assert_eq!(t.rounds_left, 0);
        assert!(t.session_finished);
    }

    #[test]
    fn finished_is_terminal() {
        let t = Phase::Finished.transition(2);
        assert_eq!(t.next, Phase::Finished);
        assert_eq!(t.rounds_left, 2);
    }

    #[test]
    fn kinds_and_labels() {
        assert_eq!(Phase::Work.kind(), Some(PhaseKind::Work));
        assert_eq!(Phase::ShortBreak.kind(), Some(PhaseKind::Break));
        assert_eq!(Phase::LongBreak.kind(), Some(PhaseKind::Break));
        assert_eq!(Phase::Finished.kind(), None);
        assert_eq!(Phase::ShortBreak.to_string(), "Short break");
    }
}
