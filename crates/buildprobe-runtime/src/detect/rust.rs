//! Rust toolchain prober.

use std::sync::Arc;

use buildprobe_core::{
    CommandRunner, ProbeConfig, RustStatus, StatusError, evaluate_rust, write_status,
};
use tracing::info;

use crate::probes::{RustupComponentsProbe, VersionProbe};

/// Rust toolchain prober.
pub struct RustProber {
    runner: Arc<dyn CommandRunner>,
}

impl RustProber {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Check for `rustc` and `cargo`, listing at most `component_limit`
    /// installed components.
    pub fn evaluate(&self, component_limit: usize) -> RustStatus {
        let rustc = VersionProbe::rustc(Arc::clone(&self.runner));
        let cargo = VersionProbe::cargo(Arc::clone(&self.runner));
        let components = RustupComponentsProbe::new(Arc::clone(&self.runner));

        evaluate_rust(&rustc, &cargo, &components, component_limit)
    }

    /// Evaluate and write the Rust status file.
    pub fn run(&self, config: &ProbeConfig) -> Result<RustStatus, StatusError> {
        info!("Checking Rust toolchain");
        let status = self.evaluate(config.component_limit);
        write_status(&config.rust_status_path, &status, config.format)?;
        info!(
            path = %config.rust_status_path.display(),
            installed = status.already_installed,
            "Rust status written"
        );
        Ok(status)
    }
}
