//! Operator command tokens.
//!
//! The command source hands the engine a raw integer; this module gives that
//! integer a name. Unknown tokens are preserved rather than rejected so the
//! Idle handler can log exactly what the operator typed before routing to
//! the fault state.

use std::fmt;

/// A decoded operator command.
///
/// # Example
///
/// ```rust
/// use turret::core::Command;
///
/// assert_eq!(Command::from_token(2), Command::Move);
/// assert_eq!(Command::from_token(9), Command::Unknown(9));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    /// Token `1`: report status and history, stay in `Idle`.
    Status,
    /// Token `2`: begin a movement cycle.
    Move,
    /// Token `3`: fire a shot.
    Shoot,
    /// Token `4`: run a targeting calculation.
    Calculate,
    /// Token `5`: halt the controller.
    Stop,
    /// Any other token; routes the controller to the fault state.
    Unknown(i64),
}

impl Command {
    /// Decode a raw integer token into a command.
    pub fn from_token(token: i64) -> Self {
        match token {
            1 => Self::Status,
            2 => Self::Move,
            3 => Self::Shoot,
            4 => Self::Calculate,
            5 => Self::Stop,
            other => Self::Unknown(other),
        }
    }

    /// The raw token this command decodes from.
    pub fn token(&self) -> i64 {
        match self {
            Self::Status => 1,
            Self::Move => 2,
            Self::Shoot => 3,
            Self::Calculate => 4,
            Self::Stop => 5,
            Self::Unknown(other) => *other,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status => write!(f, "status"),
            Self::Move => write!(f, "move"),
            Self::Shoot => write!(f, "shoot"),
            Self::Calculate => write!(f, "calculate"),
            Self::Stop => write!(f, "stop"),
            Self::Unknown(token) => write!(f, "unknown({token})"),
        }
    }
}
