//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`envdoctor check`, `envdoctor generate`)
//! - Shared input and config loading
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod generate;
pub mod input;
pub mod parse;
pub mod sample;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use input::{read_input, EnvInput};
