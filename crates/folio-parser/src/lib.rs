//! Pure command interpreter for the terminal session.
//!
//! Pipeline: raw line → tokenize → `Command` → `CommandResult`.
//! Interpretation is synchronous, deterministic, and total: every input,
//! malformed ones included, maps to a well-formed result. Failures are
//! ordinary output lines, never errors.

pub mod command;
pub mod interpreter;

pub use command::Command;
pub use interpreter::interpret;
