//! GPU detection probes.

use std::sync::Arc;

use buildprobe_core::{Capability, CommandRunner, Probe, ProbeError};

/// Arguments for the CSV device-name query.
const NAME_QUERY: [&str; 2] = ["--query-gpu=name", "--format=csv,noheader"];

/// Probe for a working `nvidia-smi`.
///
/// Available when `nvidia-smi` runs successfully; the detail is the first
/// device name from the CSV query, if that query answers.
pub struct NvidiaSmiProbe {
    runner: Arc<dyn CommandRunner>,
}

impl NvidiaSmiProbe {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    fn device_name(&self) -> Option<String> {
        let output = self.runner.run("nvidia-smi", &NAME_QUERY).ok()?;
        if !output.success {
            return None;
        }
        // If multiple GPUs, take the first one
        output.stdout.lines().next().map(|l| l.trim().to_string()).filter(|l| !l.is_empty())
    }
}

impl Probe for NvidiaSmiProbe {
    fn detect(&self) -> Result<Capability, ProbeError> {
        if !self.runner.exists("nvidia-smi") {
            return Ok(Capability::Missing);
        }

        let output = self.runner.run("nvidia-smi", &[])?;
        if !output.success {
            let reason = output
                .first_line()
                .map_or_else(|| format!("exit code {:?}", output.code), str::to_string);
            return Ok(Capability::unavailable(reason));
        }

        Ok(Capability::Available {
            detail: self.device_name(),
        })
    }
}

/// Probe for an NVIDIA device in the PCI bus listing.
///
/// Available when `lspci` output mentions NVIDIA (case-insensitive); the
/// detail is the first matching line.
pub struct LspciProbe {
    runner: Arc<dyn CommandRunner>,
}

impl LspciProbe {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

impl Probe for LspciProbe {
    fn detect(&self) -> Result<Capability, ProbeError> {
        if !self.runner.exists("lspci") {
            return Ok(Capability::Missing);
        }

        let output = self.runner.run("lspci", &[])?;
        if !output.success {
            return Ok(Capability::unavailable(format!(
                "lspci exited with {:?}",
                output.code
            )));
        }

        Ok(output
            .stdout
            .lines()
            .find(|line| line.to_lowercase().contains("nvidia"))
            .map_or_else(
                || Capability::unavailable("no NVIDIA device listed"),
                |line| Capability::available(line.trim()),
            ))
    }
}
