//! Command-line adapter for buildprobe.
//!
//! Parses arguments, wires the system command runner into the probers and
//! the build driver, and renders results for the terminal.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliContext, bootstrap, init_logging, load_dotenv};
pub use commands::{BuildArgs, Commands, ProbeArgs};
pub use error::CliError;
pub use parser::Cli;
