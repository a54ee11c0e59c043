//! Human-readable status and history reporting.
//!
//! The engine hands reporters plain values; how they are rendered is up to
//! the reporter. This module provides the value types and the default text
//! renderings used by the console reporter.

use crate::core::StateRecord;
use crate::core::SystemState;
use serde::Serialize;
use std::fmt;

/// Snapshot of the engine's observable counters.
///
/// Producing a report never mutates the engine; a report is a copy of the
/// fields at the moment it was taken.
///
/// # Example
///
/// ```rust
/// use turret::core::SystemState;
/// use turret::report::StatusReport;
///
/// let report = StatusReport {
///     state: SystemState::Idle,
///     move_count: 2,
///     error_count: 0,
///     last_heartbeat_ms: 1500,
/// };
/// assert_eq!(
///     report.to_string(),
///     "[status] state=Idle moves=2 errors=0 heartbeat=1500ms"
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct StatusReport {
    /// The state that was current when the snapshot was taken.
    pub state: SystemState,
    /// Consecutive moves since the last shot.
    pub move_count: u32,
    /// Cumulative faults since engine creation.
    pub error_count: u32,
    /// Timestamp of the most recent transition.
    pub last_heartbeat_ms: u64,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[status] state={} moves={} errors={} heartbeat={}ms",
            self.state, self.move_count, self.error_count, self.last_heartbeat_ms
        )
    }
}

/// Render the full ordered history as a single report line.
///
/// # Example
///
/// ```rust
/// use turret::core::{StateRecord, SystemState};
/// use turret::report::render_history;
///
/// let records = [
///     StateRecord::new(SystemState::Init, 0),
///     StateRecord::new(SystemState::Idle, 12),
/// ];
/// assert_eq!(render_history(&records), "[history] (Init,0) (Idle,12)");
/// ```
pub fn render_history(records: &[StateRecord]) -> String {
    let mut line = String::from("[history]");
    for record in records {
        line.push_str(&format!(" ({},{})", record.state, record.at_ms));
    }
    line
}
