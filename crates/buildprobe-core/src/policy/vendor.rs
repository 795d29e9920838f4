//! GPU vendor detection for the build driver.

use tracing::{debug, info};

use crate::ports::{Capability, Probe, observe};
use crate::vendor::BuildVendor;

/// Result of vendor detection on the build host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorDetection {
    /// Detected vendor.
    pub vendor: BuildVendor,
    /// Device name, only known when the GPU query tool answered.
    pub gpu_name: Option<String>,
}

/// Detect the host GPU vendor.
///
/// Priority: a working GPU query tool, then an NVIDIA entry on the PCI bus,
/// then no GPU. The bus listing is not consulted when the query succeeds.
pub fn detect_vendor(gpu_query: &dyn Probe, bus_listing: &dyn Probe) -> VendorDetection {
    if let Capability::Available { detail } = observe(gpu_query) {
        info!(gpu = detail.as_deref().unwrap_or("unknown"), "NVIDIA GPU detected");
        return VendorDetection {
            vendor: BuildVendor::Nvidia,
            gpu_name: detail,
        };
    }

    if observe(bus_listing).is_available() {
        info!("NVIDIA GPU detected on the PCI bus");
        return VendorDetection {
            vendor: BuildVendor::Nvidia,
            gpu_name: None,
        };
    }

    debug!("No GPU detected");
    VendorDetection {
        vendor: BuildVendor::NoGpu,
        gpu_name: None,
    }
}

/// Apply a user override to a detected vendor.
///
/// A non-empty override wins unconditionally and is not validated here;
/// the build driver rejects unsupported values.
pub fn resolve_build_vendor(override_vendor: Option<&str>, detected: &VendorDetection) -> String {
    match override_vendor {
        Some(v) if !v.is_empty() => {
            info!(vendor = v, detected = %detected.vendor, "Using vendor override");
            v.to_string()
        }
        _ => detected.vendor.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockProbe;

    fn probe(capability: Capability, calls: usize) -> MockProbe {
        let mut probe = MockProbe::new();
        probe
            .expect_detect()
            .times(calls)
            .returning(move || Ok(capability.clone()));
        probe
    }

    #[test]
    fn test_query_tool_wins() {
        let query = probe(Capability::available("Tesla T4"), 1);
        let bus = probe(Capability::Missing, 0);

        let detection = detect_vendor(&query, &bus);
        assert_eq!(detection.vendor, BuildVendor::Nvidia);
        assert_eq!(detection.gpu_name.as_deref(), Some("Tesla T4"));
    }

    #[test]
    fn test_bus_listing_fallback_has_no_name() {
        let query = probe(Capability::unavailable("driver not loaded"), 1);
        let bus = probe(Capability::available("NVIDIA Corporation GA102"), 1);

        let detection = detect_vendor(&query, &bus);
        assert_eq!(detection.vendor, BuildVendor::Nvidia);
        assert_eq!(detection.gpu_name, None);
    }

    #[test]
    fn test_defaults_to_none() {
        let query = probe(Capability::Missing, 1);
        let bus = probe(Capability::unavailable("no NVIDIA device listed"), 1);

        assert_eq!(detect_vendor(&query, &bus).vendor, BuildVendor::NoGpu);
    }

    #[test]
    fn test_override() {
        let detected = VendorDetection {
            vendor: BuildVendor::Nvidia,
            gpu_name: None,
        };
        assert_eq!(resolve_build_vendor(None, &detected), "nvidia");
        assert_eq!(resolve_build_vendor(Some(""), &detected), "nvidia");
        assert_eq!(resolve_build_vendor(Some("cpu"), &detected), "cpu");
        // Not validated at this stage
        assert_eq!(resolve_build_vendor(Some("amd"), &detected), "amd");
    }
}
