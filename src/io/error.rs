//! Command source errors.

use thiserror::Error;

/// Errors a command source can report instead of a token.
///
/// The engine treats every variant as an invalid command: the Idle handler
/// routes to the fault state and nothing propagates to the caller of
/// `update()`.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("command stream closed before a token was read")]
    Closed,

    #[error("malformed command token {0:?}; expected an integer")]
    Malformed(String),

    #[error("I/O failure while reading a command: {0}")]
    Io(#[from] std::io::Error),
}
