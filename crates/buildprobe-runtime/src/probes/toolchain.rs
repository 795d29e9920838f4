//! Rust toolchain component listing.

use std::sync::Arc;

use buildprobe_core::{Capability, CommandRunner, Probe, ProbeError};

/// Probe listing installed components via `rustup`.
///
/// The detail is the raw newline-separated listing; bounding it is the
/// policy's concern.
pub struct RustupComponentsProbe {
    runner: Arc<dyn CommandRunner>,
}

impl RustupComponentsProbe {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

impl Probe for RustupComponentsProbe {
    fn detect(&self) -> Result<Capability, ProbeError> {
        if !self.runner.exists("rustup") {
            return Ok(Capability::Missing);
        }

        let output = self
            .runner
            .run("rustup", &["component", "list", "--installed"])?;
        if !output.success {
            return Ok(Capability::unavailable("rustup component list failed"));
        }

        Ok(Capability::available(output.stdout.trim()))
    }
}
