//! External collaborators: clock, command source, reporter.
//!
//! The engine calls into these seams but does not own them. Production
//! implementations wrap the process clock and console; tests substitute
//! scripted implementations.

mod clock;
mod console;
mod error;

pub use clock::MonotonicClock;
pub use console::{ConsoleCommandSource, ConsoleReporter};
pub use error::CommandError;

use crate::core::StateRecord;
use crate::report::StatusReport;

/// Source of monotonically non-decreasing millisecond timestamps.
///
/// The epoch is arbitrary but fixed for the life of the clock; the engine
/// only ever compares and records these values.
pub trait Clock {
    /// Milliseconds elapsed since the clock's epoch.
    fn now_ms(&mut self) -> u64;
}

/// Blocking source of operator command tokens.
///
/// `read_command` blocks without timeout until a token or an error is
/// available; a caller wanting cancellable input must wrap its source
/// accordingly. Errors are not fatal to the engine — the Idle handler
/// treats them as invalid commands.
pub trait CommandSource {
    /// Read the next raw integer token.
    fn read_command(&mut self) -> Result<i64, CommandError>;
}

/// Sink for status messages, status reports and history reports.
///
/// The rendering format is the reporter's business; the engine only
/// guarantees the content: state, counters, and the full ordered history.
pub trait Reporter {
    /// A snapshot of the engine's counters.
    fn status(&mut self, report: &StatusReport);

    /// The full ordered state history.
    fn history(&mut self, records: &[StateRecord]);

    /// A free-form status message.
    fn note(&mut self, message: &str);
}
