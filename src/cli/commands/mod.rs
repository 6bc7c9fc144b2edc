//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running `wikilint` with no
//! subcommand checks the current directory.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod file;
pub mod rules;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, EXIT_INVALID, EXIT_USAGE};
