//! Turret: a finite-state actuator controller.
//!
//! Turret simulates a simple move/shoot/calculate actuator loop driven by
//! operator commands. The core is the state-machine [`Engine`]: it owns the
//! current state, a heartbeat timestamp, the move and error counters, and an
//! append-only history of every state entered. Console input, report output
//! and timestamp acquisition are collaborators behind the [`io`] traits, so
//! the engine itself is fully testable without a terminal.
//!
//! # Core Concepts
//!
//! - **State**: the closed [`SystemState`] enumeration; `Init` is initial,
//!   `Stopped` is terminal
//! - **Transition**: an atomic update of state, heartbeat, and history
//! - **Faults as states**: errors are transitions into `Error`, not values
//!   propagated to the caller; more than three faults halts the engine
//!
//! # Example
//!
//! ```rust
//! use turret::core::SystemState;
//! use turret::engine::Engine;
//! use turret::io::{Clock, CommandError, CommandSource, ConsoleReporter};
//!
//! struct StepClock(u64);
//! impl Clock for StepClock {
//!     fn now_ms(&mut self) -> u64 {
//!         self.0 += 1;
//!         self.0
//!     }
//! }
//!
//! // Move, then stop.
//! struct Script(Vec<i64>);
//! impl CommandSource for Script {
//!     fn read_command(&mut self) -> Result<i64, CommandError> {
//!         Ok(self.0.pop().unwrap_or(5))
//!     }
//! }
//!
//! let reporter = ConsoleReporter::new(Vec::<u8>::new(), false);
//! let mut engine = Engine::new(StepClock(0), Script(vec![2]), reporter);
//! engine.start();
//!
//! assert_eq!(engine.current_state(), SystemState::Stopped);
//! assert_eq!(engine.move_count(), 1);
//! ```

pub mod core;
pub mod engine;
pub mod io;
pub mod report;

// Re-export commonly used types
pub use crate::core::{Command, StateHistory, StateRecord, SystemState};
pub use crate::engine::{Engine, DEFAULT_DELAY};
pub use crate::report::StatusReport;
