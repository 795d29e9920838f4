//! Host GPU vendor detection for the build driver.

use std::sync::Arc;

use buildprobe_core::{CommandRunner, VendorDetection, detect_vendor};

use crate::probes::{LspciProbe, NvidiaSmiProbe};

/// Detect the host GPU vendor with `nvidia-smi`, falling back to `lspci`.
pub fn detect_system_vendor(runner: Arc<dyn CommandRunner>) -> VendorDetection {
    let gpu_query = NvidiaSmiProbe::new(Arc::clone(&runner));
    let bus_listing = LspciProbe::new(runner);
    detect_vendor(&gpu_query, &bus_listing)
}
