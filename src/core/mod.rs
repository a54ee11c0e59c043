//! Core controller types.
//!
//! This module contains the value types the engine is built from:
//! - The closed [`SystemState`] enumeration
//! - Decoded operator [`Command`] tokens
//! - Append-only [`StateHistory`] tracking
//!
//! Everything here is a plain value with no I/O; the collaborators that
//! produce timestamps and command tokens live in [`crate::io`].

mod command;
mod history;
mod state;

pub use command::Command;
pub use history::{StateHistory, StateRecord};
pub use state::SystemState;
