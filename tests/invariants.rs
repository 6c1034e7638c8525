use pomodoro_timer::{Phase, Settings, TimerState};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Command {
    Tick(u16),
    Start,
    Pause,
    Reset,
    Skip,
}

fn any_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        6 => (1u16..400).prop_map(Command::Tick),
        2 => Just(Command::Start),
        1 => Just(Command::Pause),
        1 => Just(Command::Reset),
        1 => Just(Command::Skip),
    ]
}

fn any_settings() -> impl Strategy<Value = Settings> {
    (1u32..4, 1u32..3, 1u32..4, 1u32..5).prop_map(|(work, short, long, rounds)| Settings {
        work_minutes: work,
        short_break_minutes: short,
        long_break_minutes: long,
        total_rounds: rounds,
    })
}

fn assert_well_formed(state: &TimerState) {
    assert!(state.seconds_remaining() <= 59);
    assert_ne!(state.phase(), Phase::Finished);
    assert!(state.remaining_seconds() > 0, "00:00 must never be observable");
    assert!(state.rounds_left() <= state.settings().total_rounds);
    let progress = state.progress();
    assert!((0.0..100.0).contains(&progress));
}

proptest! {
    #[test]
    fn reachable_states_are_well_formed(settings in any_settings(), commands in prop::collection::vec(any_command(), 0..40)) {
        let mut state = TimerState::new(settings);
        assert_well_formed(&state);

        for command in commands {
            match command {
                Command::Tick(n) => {
                    for _ in 0..n {
                        let rounds_before = state.rounds_left();
                        let phase_before = state.phase();
                        let progress_before = state.progress();
                        let outcome = state.tick();
                        assert_well_formed(&state);

                        if outcome.finished_snapshot.is_none() {
                            prop_assert!(state.rounds_left() <= rounds_before);
                        }
                        if state.phase() == phase_before && outcome.is_quiet() {
                            prop_assert!(state.progress() >= progress_before);
                        }
                    }
                }
                Command::Start => {
                    state.start();
                    prop_assert!(state.is_running());
                }
                Command::Pause => {
                    state.pause();
                    let before = state.clone();
                    state.tick();
                    prop_assert_eq!(&state, &before);
                }
                Command::Reset => {
                    state.reset();
                    prop_assert_eq!(&state, &TimerState::new(settings));
                }
                Command::Skip => {
                    state.skip_to_final_second();
                    assert_well_formed(&state);
                }
            }
        }
    }
}
