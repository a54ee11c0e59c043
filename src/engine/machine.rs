//! The state machine engine.

use crate::core::{Command, StateHistory, StateRecord, SystemState};
use crate::io::{Clock, CommandSource, Reporter};
use crate::report::StatusReport;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Delay applied by the init handler when none was configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Faults beyond this count escalate the next error handling pass to a halt.
const MAX_RECOVERABLE_FAULTS: u32 = 3;

/// Consecutive moves that force an automatic shot.
const MOVES_PER_AUTO_SHOT: u32 = 3;

/// The finite-state controller engine.
///
/// The engine owns the current state, the heartbeat of the most recent
/// transition, the move and error counters, and the append-only state
/// history. It is driven by one caller at a time; no locking is provided.
///
/// Each [`update`](Engine::update) dispatches to exactly one state handler,
/// and the handler decides the next state. Faults are ordinary transitions
/// into [`SystemState::Error`], never values returned to the caller.
///
/// # Example
///
/// ```rust
/// use turret::core::SystemState;
/// use turret::engine::Engine;
/// use turret::io::{Clock, CommandError, CommandSource, ConsoleReporter};
///
/// struct FixedClock(u64);
/// impl Clock for FixedClock {
///     fn now_ms(&mut self) -> u64 {
///         self.0 += 10;
///         self.0
///     }
/// }
///
/// struct Stop;
/// impl CommandSource for Stop {
///     fn read_command(&mut self) -> Result<i64, CommandError> {
///         Ok(5)
///     }
/// }
///
/// let reporter = ConsoleReporter::new(Vec::<u8>::new(), false);
/// let mut engine = Engine::new(FixedClock(0), Stop, reporter);
/// engine.start();
/// assert_eq!(engine.current_state(), SystemState::Stopped);
/// ```
pub struct Engine<C, S, R> {
    current_state: SystemState,
    last_heartbeat: u64,
    delay: Option<Duration>,
    error_count: u32,
    move_count: u32,
    history: StateHistory,
    clock: C,
    commands: S,
    reporter: R,
}

impl<C: Clock, S: CommandSource, R: Reporter> Engine<C, S, R> {
    /// Create an engine in `Init` with heartbeat 0, zeroed counters, no
    /// configured delay, and a history seeded with `(Init, 0)`.
    pub fn new(clock: C, commands: S, reporter: R) -> Self {
        Self {
            current_state: SystemState::Init,
            last_heartbeat: 0,
            delay: None,
            error_count: 0,
            move_count: 0,
            history: StateHistory::seeded(SystemState::Init),
            clock,
            commands,
            reporter,
        }
    }

    /// Set the pacing delay at construction time.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// The active state.
    pub fn current_state(&self) -> SystemState {
        self.current_state
    }

    /// Timestamp of the most recent transition.
    pub fn last_heartbeat(&self) -> u64 {
        self.last_heartbeat
    }

    /// The configured pacing delay, if any.
    ///
    /// The delay is caller-facing configuration: the engine records it and
    /// the init handler defaults it, but no engine loop ever sleeps on it.
    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    /// Configure the pacing delay.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = Some(delay);
    }

    /// Cumulative faults since construction.
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Consecutive moves since the last shot.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The append-only state history.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Snapshot the observable counters. Never mutates the engine.
    pub fn status_report(&self) -> StatusReport {
        StatusReport {
            state: self.current_state,
            move_count: self.move_count,
            error_count: self.error_count,
            last_heartbeat_ms: self.last_heartbeat,
        }
    }

    /// The transition primitive: set the state, stamp the heartbeat, append
    /// to history.
    ///
    /// No validation is performed — any state is a legal target, and which
    /// handler chose the target is the only legality rule in the system.
    pub fn transition_to(&mut self, new_state: SystemState) {
        let now = self.clock.now_ms();
        debug!(from = %self.current_state, to = %new_state, at_ms = now, "transition");
        self.current_state = new_state;
        self.last_heartbeat = now;
        self.history.push(StateRecord::new(new_state, now));
    }

    /// Run the control cycle to completion.
    ///
    /// Runs the init handler once, then dispatches until the terminal state
    /// is reached, then runs shutdown reporting. The loop never sleeps;
    /// callers wanting pacing sleep [`delay`](Engine::delay) between their
    /// own [`update`](Engine::update) calls instead of using `start`.
    ///
    /// Terminates only if some handler drives the engine to `Stopped`; with
    /// a command source that never yields `5` and never errors, it blocks
    /// in the Idle handler indefinitely.
    pub fn start(&mut self) {
        self.perform_init();
        while self.current_state != SystemState::Stopped {
            self.update();
        }
        self.shutdown();
    }

    /// Dispatch the current state to its action handler.
    ///
    /// Exactly one handler runs per call; the handler picks the next state.
    /// Calling `update` again after shutdown reporting has run is undefined
    /// and callers must not do so.
    pub fn update(&mut self) {
        match self.current_state {
            SystemState::Init => self.perform_init(),
            SystemState::Idle => self.perform_process(),
            SystemState::Movement => self.perform_movement(),
            SystemState::Shooting => self.perform_shooting(),
            SystemState::Calculation => self.perform_calculation(),
            SystemState::Error => self.perform_error_handling(),
            SystemState::Stopped => self.shutdown(),
        }
    }

    /// Default the delay if unconfigured and hand off to `Idle`.
    fn perform_init(&mut self) {
        info!("initializing");
        self.reporter.note("Initializing...");
        if self.delay.is_none() {
            self.delay = Some(DEFAULT_DELAY);
        }
        self.transition_to(SystemState::Idle);
    }

    /// Idle: report status, then let one operator command pick the next
    /// state. The only externally-driven handler; the command read blocks
    /// without timeout.
    fn perform_process(&mut self) {
        let report = self.status_report();
        self.reporter.status(&report);

        let token = match self.commands.read_command() {
            Ok(token) => token,
            Err(error) => {
                warn!(%error, "command read failed");
                self.reporter.note("Invalid");
                self.transition_to(SystemState::Error);
                return;
            }
        };

        match Command::from_token(token) {
            Command::Status => {
                let report = self.status_report();
                self.reporter.status(&report);
                self.reporter.history(self.history.records());
            }
            Command::Move => self.transition_to(SystemState::Movement),
            Command::Shoot => self.transition_to(SystemState::Shooting),
            Command::Calculate => self.transition_to(SystemState::Calculation),
            Command::Stop => self.transition_to(SystemState::Stopped),
            Command::Unknown(token) => {
                warn!(token, "unrecognized command");
                self.reporter.note("Invalid");
                self.transition_to(SystemState::Error);
            }
        }
    }

    /// One move; the third consecutive move forces an automatic shot.
    fn perform_movement(&mut self) {
        self.reporter.note("Moving...");
        self.move_count += 1;
        if self.move_count >= MOVES_PER_AUTO_SHOT {
            self.transition_to(SystemState::Shooting);
        } else {
            self.transition_to(SystemState::Idle);
        }
    }

    /// Fire and reset the consecutive-move counter.
    fn perform_shooting(&mut self) {
        self.reporter.note("Shooting...");
        self.move_count = 0;
        self.transition_to(SystemState::Idle);
    }

    /// Calculation requires at least one prior move; without one it is a
    /// fault. No counters are mutated either way.
    fn perform_calculation(&mut self) {
        self.reporter.note("Calculating...");
        if self.move_count == 0 {
            self.transition_to(SystemState::Error);
        } else {
            self.transition_to(SystemState::Idle);
        }
    }

    /// Count the fault; more than three cumulative faults is fatal.
    fn perform_error_handling(&mut self) {
        self.reporter.note("Error!");
        self.error_count += 1;
        if self.error_count > MAX_RECOVERABLE_FAULTS {
            warn!(errors = self.error_count, "fault threshold exceeded, halting");
            self.transition_to(SystemState::Stopped);
        } else {
            self.transition_to(SystemState::Idle);
        }
    }

    /// Terminal reporting once `Stopped` is reached. The owner is expected
    /// to drop the engine afterwards.
    fn shutdown(&mut self) {
        info!("shutting down");
        self.reporter.note("Shutting down...");
        self.reporter.history(self.history.records());
    }
}
