//! CLI bootstrap: logging, environment and the command runner.
//!
//! The system command runner is created here and nowhere else; handlers
//! receive it through [`CliContext`].

use std::path::PathBuf;
use std::sync::Arc;

use buildprobe_core::CommandRunner;
use buildprobe_runtime::SystemCommandRunner;
use tracing_subscriber::EnvFilter;

/// Load a `.env` file from the working directory, if there is one.
///
/// Returns the loaded path. Runs before logging is set up, so the caller
/// reports it.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Install the fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
/// Logs go to stderr so stdout stays clean for results.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Dependencies shared by command handlers.
#[derive(Clone)]
pub struct CliContext {
    runner: Arc<dyn CommandRunner>,
}

impl CliContext {
    /// Context backed by a custom runner.
    pub fn with_runner(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Shared command runner.
    pub fn runner(&self) -> Arc<dyn CommandRunner> {
        Arc::clone(&self.runner)
    }
}

/// Compose the context for a real run.
pub fn bootstrap() -> CliContext {
    CliContext::with_runner(Arc::new(SystemCommandRunner::new()))
}
