//! CUDA prober: `nvcc`, `nvidia-smi` and `lspci` folded into the CUDA record.

use std::sync::Arc;

use buildprobe_core::{
    CommandRunner, CudaProbes, CudaStatus, ProbeConfig, StatusError, evaluate_cuda, write_status,
};
use tracing::info;

use crate::probes::{LspciProbe, NvidiaSmiProbe, VersionProbe};

/// CUDA capability prober.
pub struct CudaProber {
    runner: Arc<dyn CommandRunner>,
}

impl CudaProber {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Evaluate CUDA capability for `vendor` without writing anything.
    pub fn evaluate(&self, vendor: &str) -> CudaStatus {
        let toolchain = VersionProbe::nvcc(Arc::clone(&self.runner));
        let gpu_query = NvidiaSmiProbe::new(Arc::clone(&self.runner));
        let bus_listing = LspciProbe::new(Arc::clone(&self.runner));

        evaluate_cuda(
            vendor,
            &CudaProbes {
                toolchain: &toolchain,
                gpu_query: &gpu_query,
                bus_listing: &bus_listing,
            },
        )
    }

    /// Evaluate for the configured vendor and write the CUDA status file.
    pub fn run(&self, config: &ProbeConfig) -> Result<CudaStatus, StatusError> {
        info!(vendor = %config.vendor, "Checking CUDA capability");
        let status = self.evaluate(&config.vendor);
        write_status(&config.cuda_status_path, &status, config.format)?;
        info!(
            path = %config.cuda_status_path.display(),
            capable = status.capable,
            runtime = status.runtime_available,
            "CUDA status written"
        );
        Ok(status)
    }
}
