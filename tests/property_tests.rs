//! Property-based tests for the controller engine.
//!
//! These tests use proptest to verify the engine's invariants hold across
//! many randomly generated command sequences.

use proptest::prelude::*;
use std::collections::VecDeque;
use turret::engine::Engine;
use turret::io::{Clock, CommandError, CommandSource, ConsoleReporter};
use turret::SystemState;

/// Clock advancing one millisecond per reading.
struct StepClock(u64);

impl Clock for StepClock {
    fn now_ms(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

/// Replays a token script, then reports the stream as closed.
struct Script(VecDeque<i64>);

impl Script {
    fn of(tokens: &[i64]) -> Self {
        Self(tokens.iter().copied().collect())
    }
}

impl CommandSource for Script {
    fn read_command(&mut self) -> Result<i64, CommandError> {
        self.0.pop_front().ok_or(CommandError::Closed)
    }
}

type TestEngine = Engine<StepClock, Script, ConsoleReporter<Vec<u8>>>;

fn engine_with(tokens: &[i64]) -> TestEngine {
    Engine::new(
        StepClock(0),
        Script::of(tokens),
        ConsoleReporter::new(Vec::<u8>::new(), false),
    )
}

/// Upper bound on dispatches for any script: every token costs at most two
/// updates (action + return to Idle) and a closed stream halts within eight.
fn run_to_halt(engine: &mut TestEngine, script_len: usize) {
    engine.update(); // Init -> Idle
    let budget = script_len * 2 + 16;
    for _ in 0..budget {
        if engine.current_state() == SystemState::Stopped {
            return;
        }
        engine.update();
    }
    panic!("engine did not halt within {budget} updates");
}

prop_compose! {
    fn arbitrary_token()(token in -1i64..8) -> i64 { token }
}

proptest! {
    #[test]
    fn history_tracks_transition_count(states in prop::collection::vec(0..7usize, 0..20)) {
        let mut engine = engine_with(&[]);
        let all = [
            SystemState::Init,
            SystemState::Idle,
            SystemState::Movement,
            SystemState::Shooting,
            SystemState::Calculation,
            SystemState::Error,
            SystemState::Stopped,
        ];

        for &index in &states {
            engine.transition_to(all[index]);
        }

        prop_assert_eq!(engine.history().len(), 1 + states.len());
        prop_assert_eq!(engine.history().last().state, engine.current_state());
    }

    #[test]
    fn history_timestamps_never_decrease(tokens in prop::collection::vec(arbitrary_token(), 0..30)) {
        let mut engine = engine_with(&tokens);
        run_to_halt(&mut engine, tokens.len());

        let records = engine.history().records();
        for pair in records.windows(2) {
            prop_assert!(pair[1].at_ms >= pair[0].at_ms);
        }
    }

    #[test]
    fn last_history_entry_always_matches_current_state(
        tokens in prop::collection::vec(arbitrary_token(), 0..30)
    ) {
        let mut engine = engine_with(&tokens);
        engine.update(); // Init -> Idle
        for _ in 0..tokens.len() * 2 + 16 {
            if engine.current_state() == SystemState::Stopped {
                break;
            }
            engine.update();
            prop_assert_eq!(engine.history().last().state, engine.current_state());
        }
    }

    #[test]
    fn move_count_is_bounded(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let mut engine = engine_with(&tokens);
        engine.update(); // Init -> Idle
        for _ in 0..tokens.len() * 2 + 16 {
            if engine.current_state() == SystemState::Stopped {
                break;
            }
            engine.update();
            prop_assert!(engine.move_count() <= 3);
        }
    }

    #[test]
    fn leaving_shooting_zeroes_move_count(
        tokens in prop::collection::vec(arbitrary_token(), 0..40)
    ) {
        let mut engine = engine_with(&tokens);
        engine.update(); // Init -> Idle
        for _ in 0..tokens.len() * 2 + 16 {
            if engine.current_state() == SystemState::Stopped {
                break;
            }
            let was_shooting = engine.current_state() == SystemState::Shooting;
            engine.update();
            if was_shooting {
                prop_assert_eq!(engine.move_count(), 0);
            }
        }
    }

    #[test]
    fn error_count_is_monotone(tokens in prop::collection::vec(arbitrary_token(), 0..40)) {
        let mut engine = engine_with(&tokens);
        engine.update(); // Init -> Idle
        let mut previous = engine.error_count();
        for _ in 0..tokens.len() * 2 + 16 {
            if engine.current_state() == SystemState::Stopped {
                break;
            }
            engine.update();
            prop_assert!(engine.error_count() >= previous);
            previous = engine.error_count();
        }
    }

    #[test]
    fn error_count_never_exceeds_four(tokens in prop::collection::vec(arbitrary_token(), 0..60)) {
        let mut engine = engine_with(&tokens);
        run_to_halt(&mut engine, tokens.len());
        prop_assert!(engine.error_count() <= 4);
    }

    #[test]
    fn status_report_never_mutates(tokens in prop::collection::vec(arbitrary_token(), 0..20)) {
        let mut engine = engine_with(&tokens);
        engine.update();

        let before_len = engine.history().len();
        let first = engine.status_report();
        let second = engine.status_report();
        prop_assert_eq!(first, second);
        prop_assert_eq!(engine.history().len(), before_len);
    }

    #[test]
    fn every_script_eventually_halts(tokens in prop::collection::vec(arbitrary_token(), 0..30)) {
        // Once the script runs dry the closed stream feeds the fault path,
        // which halts after the fourth cumulative fault.
        let mut engine = engine_with(&tokens);
        run_to_halt(&mut engine, tokens.len());
        prop_assert_eq!(engine.current_state(), SystemState::Stopped);
    }
}

#[test]
fn scenario_triple_move_auto_shoots_then_stops() {
    let mut engine = engine_with(&[2, 2, 2, 5]);
    engine.start();

    let states: Vec<SystemState> = engine.history().records().iter().map(|r| r.state).collect();
    assert_eq!(
        states,
        vec![
            SystemState::Init,
            SystemState::Idle,
            SystemState::Movement,
            SystemState::Idle,
            SystemState::Movement,
            SystemState::Idle,
            SystemState::Movement,
            SystemState::Shooting,
            SystemState::Idle,
            SystemState::Stopped,
        ]
    );
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.error_count(), 0);
}

#[test]
fn scenario_calculation_fault_recovers_then_stops() {
    let mut engine = engine_with(&[4, 5]);
    engine.start();

    let states: Vec<SystemState> = engine.history().records().iter().map(|r| r.state).collect();
    assert_eq!(
        states,
        vec![
            SystemState::Init,
            SystemState::Idle,
            SystemState::Calculation,
            SystemState::Error,
            SystemState::Idle,
            SystemState::Stopped,
        ]
    );
    assert_eq!(engine.error_count(), 1);
}

#[test]
fn scenario_four_invalid_commands_halt_the_engine() {
    let mut engine = engine_with(&[9, 9, 9, 9]);
    engine.start();

    assert_eq!(engine.current_state(), SystemState::Stopped);
    assert_eq!(engine.error_count(), 4);
    assert_eq!(engine.history().last().state, SystemState::Stopped);
}
