//! State entry history tracking.
//!
//! The history is an append-only chronological record of every state the
//! controller entered and the heartbeat timestamp at entry. It is seeded at
//! construction and never shrinks or reorders for the lifetime of the
//! engine.

use super::state::SystemState;
use serde::{Deserialize, Serialize};

/// Record of a single state entry.
///
/// Records are immutable values: a state and the monotonic millisecond
/// timestamp at which it became current.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StateRecord {
    /// The state that was entered.
    pub state: SystemState,
    /// Milliseconds since the clock's epoch when the state was entered.
    pub at_ms: u64,
}

impl StateRecord {
    /// Create a record of `state` entered at `at_ms`.
    pub fn new(state: SystemState, at_ms: u64) -> Self {
        Self { state, at_ms }
    }
}

/// Ordered, append-only history of state entries.
///
/// A history is never empty: it is seeded with the initial state at
/// construction, so the last record always names the engine's current state.
///
/// # Example
///
/// ```rust
/// use turret::core::{StateHistory, StateRecord, SystemState};
///
/// let mut history = StateHistory::seeded(SystemState::Init);
/// history.push(StateRecord::new(SystemState::Idle, 12));
/// history.push(StateRecord::new(SystemState::Movement, 40));
///
/// assert_eq!(history.len(), 3);
/// assert_eq!(history.last().state, SystemState::Movement);
/// assert_eq!(history.duration_ms(), 40);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory {
    records: Vec<StateRecord>,
}

impl StateHistory {
    /// Create a history seeded with `initial` at timestamp 0.
    pub fn seeded(initial: SystemState) -> Self {
        Self {
            records: vec![StateRecord::new(initial, 0)],
        }
    }

    /// Append a record. Records are never removed or reordered afterwards.
    pub fn push(&mut self, record: StateRecord) {
        self.records.push(record);
    }

    /// All records in entry order.
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    /// The most recent record.
    ///
    /// Infallible: the seed record guarantees the history is non-empty.
    pub fn last(&self) -> StateRecord {
        *self
            .records
            .last()
            .unwrap_or(&StateRecord::new(SystemState::Init, 0))
    }

    /// Number of records, including the seed.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True only before seeding, which no public constructor allows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Elapsed milliseconds between the first and last record.
    pub fn duration_ms(&self) -> u64 {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => last.at_ms.saturating_sub(first.at_ms),
            _ => 0,
        }
    }
}
