//! The controller's closed state enumeration.
//!
//! Exactly one state is active at a time. `Init` is the only initial state
//! and `Stopped` is the only terminal state; there is no edge out of
//! `Stopped`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named mode of the controller.
///
/// The legality of a transition is enforced entirely by which action handler
/// chose it, not by a transition table — any state is a legal target of
/// [`Engine::transition_to`](crate::engine::Engine::transition_to).
///
/// # Example
///
/// ```rust
/// use turret::core::SystemState;
///
/// assert_eq!(SystemState::Movement.name(), "Movement");
/// assert!(SystemState::Stopped.is_terminal());
/// assert!(SystemState::Error.is_fault());
/// assert!(!SystemState::Idle.is_terminal());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SystemState {
    /// One-shot startup state; configures defaults and hands off to `Idle`.
    Init,
    /// Waiting for an operator command. The only externally-driven state.
    Idle,
    /// A single actuator move is in progress.
    Movement,
    /// A shot is being fired; resets the consecutive-move counter.
    Shooting,
    /// A targeting calculation that requires at least one prior move.
    Calculation,
    /// A recoverable fault was observed; repeated faults escalate to halt.
    Error,
    /// Terminal halt state.
    Stopped,
}

impl SystemState {
    /// The state's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "Init",
            Self::Idle => "Idle",
            Self::Movement => "Movement",
            Self::Shooting => "Shooting",
            Self::Calculation => "Calculation",
            Self::Error => "Error",
            Self::Stopped => "Stopped",
        }
    }

    /// Whether this is the terminal state. Nothing runs after entry into the
    /// terminal state other than shutdown reporting.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped)
    }

    /// Whether this state represents a fault condition.
    ///
    /// Faults are ordinary states here, not exceptions: they are entered by
    /// transition and left by transition like any other state.
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_covers_every_state() {
        let all = [
            SystemState::Init,
            SystemState::Idle,
            SystemState::Movement,
            SystemState::Shooting,
            SystemState::Calculation,
            SystemState::Error,
            SystemState::Stopped,
        ];
        let names: Vec<&str> = all.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "Init",
                "Idle",
                "Movement",
                "Shooting",
                "Calculation",
                "Error",
                "Stopped"
            ]
        );
    }

    #[test]
    fn only_stopped_is_terminal() {
        assert!(SystemState::Stopped.is_terminal());
        assert!(!SystemState::Init.is_terminal());
        assert!(!SystemState::Idle.is_terminal());
        assert!(!SystemState::Error.is_terminal());
    }

    #[test]
    fn only_error_is_fault() {
        assert!(SystemState::Error.is_fault());
        assert!(!SystemState::Stopped.is_fault());
        assert!(!SystemState::Calculation.is_fault());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(SystemState::Shooting.to_string(), "Shooting");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = SystemState::Calculation;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: SystemState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
