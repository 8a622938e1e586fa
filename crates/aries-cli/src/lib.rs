//! ARIES CLI library.
//!
//! This library provides the core functionality for the ARIES command-line interface,
//! including configuration management, the seeded review desk, command execution and
//! output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command, DatasetArgs};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::{open_session, Session};
