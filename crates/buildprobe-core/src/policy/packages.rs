//! Package presence aggregation.

use tracing::info;

use crate::ports::{Probe, observe};
use crate::status::PackagesStatus;

/// Check every package probe once, in order, and collect the missing ones.
///
/// Probes are paired with their package name. Anything short of
/// "available" counts as missing.
pub fn evaluate_packages(vendor: &str, probes: &[(&str, &dyn Probe)]) -> PackagesStatus {
    let mut missing = Vec::new();

    for (name, probe) in probes {
        let capability = observe(*probe);
        if capability.is_available() {
            info!(
                package = name,
                version = capability.detail().unwrap_or(""),
                "Package installed"
            );
        } else {
            info!(package = name, "Package missing");
            missing.push((*name).to_string());
        }
    }

    PackagesStatus {
        missing,
        gpu_vendor: vendor.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{Capability, ProbeError};

    /// Package probe with a fixed answer.
    struct FixedPackage {
        name: &'static str,
        installed: bool,
    }

    impl Probe for FixedPackage {
        fn detect(&self) -> Result<Capability, ProbeError> {
            Ok(if self.installed {
                Capability::available("1.0")
            } else {
                Capability::unavailable("not installed")
            })
        }
    }

    const fn package(name: &'static str, installed: bool) -> FixedPackage {
        FixedPackage { name, installed }
    }

    #[test]
    fn test_missing_preserves_input_order() {
        let probes = [
            package("git", false),
            package("curl", true),
            package("clang", false),
            package("cmake", false),
        ];
        let refs: Vec<(&str, &dyn Probe)> =
            probes.iter().map(|p| (p.name, p as &dyn Probe)).collect();

        let status = evaluate_packages("nvidia", &refs);

        assert_eq!(status.missing, vec!["git", "clang", "cmake"]);
        assert!(status.need_install());
        assert_eq!(status.gpu_vendor, "nvidia");
    }

    #[test]
    fn test_all_installed() {
        let probes = [package("git", true), package("curl", true)];
        let refs: Vec<(&str, &dyn Probe)> =
            probes.iter().map(|p| (p.name, p as &dyn Probe)).collect();

        let status = evaluate_packages("none", &refs);

        assert!(status.missing.is_empty());
        assert!(!status.need_install());
    }

    #[test]
    fn test_empty_package_list() {
        let status = evaluate_packages("cpu", &[]);
        assert!(!status.need_install());
    }
}
