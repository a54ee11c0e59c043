//! The state machine engine: dispatch loop, action handlers, transition
//! primitive.

mod machine;

pub use machine::{Engine, DEFAULT_DELAY};
