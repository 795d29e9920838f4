//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Turn CLI arguments into a config, call the runtime, render the result
//! - Wrap domain errors in [`crate::CliError`] so `main` can pick the exit code

pub mod build;
pub mod detect;
pub mod status;
pub mod vendor;
