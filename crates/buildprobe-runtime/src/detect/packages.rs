//! System package prober backed by `dpkg`.

use std::sync::Arc;

use buildprobe_core::{
    CommandRunner, PackagesStatus, Probe, ProbeConfig, StatusError, evaluate_packages,
    write_status,
};
use tracing::{info, warn};

use crate::probes::DpkgProbe;

/// System package prober.
pub struct PackagesProber {
    runner: Arc<dyn CommandRunner>,
}

impl PackagesProber {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Check each package once, in order.
    pub fn evaluate(&self, vendor: &str, packages: &[String]) -> PackagesStatus {
        if !self.runner.exists("dpkg") {
            warn!("dpkg not found, every package is reported missing");
        }

        let probes: Vec<DpkgProbe> = packages
            .iter()
            .map(|p| DpkgProbe::new(Arc::clone(&self.runner), p.as_str()))
            .collect();
        let refs: Vec<(&str, &dyn Probe)> = probes
            .iter()
            .map(|p| (p.package(), p as &dyn Probe))
            .collect();

        evaluate_packages(vendor, &refs)
    }

    /// Evaluate the configured package list and write the packages status file.
    pub fn run(&self, config: &ProbeConfig) -> Result<PackagesStatus, StatusError> {
        info!(count = config.required_packages.len(), "Checking system packages");
        let status = self.evaluate(&config.vendor, &config.required_packages);
        write_status(&config.packages_status_path, &status, config.format)?;
        info!(
            path = %config.packages_status_path.display(),
            missing = status.missing.len(),
            "Packages status written"
        );
        Ok(status)
    }
}
