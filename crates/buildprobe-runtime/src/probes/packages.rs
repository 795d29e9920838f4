//! Package database probe (Debian `dpkg`).

use std::sync::Arc;

use buildprobe_core::{Capability, CommandRunner, Probe, ProbeError};

/// Status line `dpkg -s` prints for a fully installed package.
const INSTALLED_STATUS: &str = "Status: install ok installed";

/// Probe checking whether one package is installed.
///
/// Available with the package version when `dpkg -s` reports it as
/// installed. A package that is known but removed, or unknown, is
/// unavailable. Without `dpkg` every package is missing.
pub struct DpkgProbe {
    runner: Arc<dyn CommandRunner>,
    package: String,
}

impl DpkgProbe {
    pub fn new(runner: Arc<dyn CommandRunner>, package: impl Into<String>) -> Self {
        Self {
            runner,
            package: package.into(),
        }
    }

    /// Package this probe checks.
    pub fn package(&self) -> &str {
        &self.package
    }
}

impl Probe for DpkgProbe {
    fn detect(&self) -> Result<Capability, ProbeError> {
        if !self.runner.exists("dpkg") {
            return Ok(Capability::Missing);
        }

        let output = self.runner.run("dpkg", &["-s", self.package.as_str()])?;
        if !output.success {
            return Ok(Capability::unavailable("not known to dpkg"));
        }

        let installed = output
            .stdout
            .lines()
            .any(|line| line.trim() == INSTALLED_STATUS);
        if !installed {
            return Ok(Capability::unavailable("not fully installed"));
        }

        let version = output
            .stdout
            .lines()
            .find_map(|line| line.strip_prefix("Version:"))
            .map(|v| v.trim().to_string());
        Ok(Capability::Available { detail: version })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildprobe_core::CommandOutput;
    use buildprobe_core::test_utils::FakeCommandRunner;

    const CURL_STATUS: &str = "Package: curl\n\
Status: install ok installed\n\
Priority: optional\n\
Version: 7.81.0-1ubuntu1.16\n";

    #[test]
    fn test_installed_package() {
        let runner = FakeCommandRunner::new().with_response(
            "dpkg",
            &["-s", "curl"],
            CommandOutput::success(CURL_STATUS),
        );
        let probe = DpkgProbe::new(Arc::new(runner), "curl");

        assert_eq!(
            probe.detect().unwrap(),
            Capability::available("7.81.0-1ubuntu1.16")
        );
    }

    #[test]
    fn test_removed_package_with_leftover_config() {
        let runner = FakeCommandRunner::new().with_response(
            "dpkg",
            &["-s", "cmake"],
            CommandOutput::success("Package: cmake\nStatus: deinstall ok config-files\n"),
        );
        let probe = DpkgProbe::new(Arc::new(runner), "cmake");

        assert!(!probe.detect().unwrap().is_available());
    }

    #[test]
    fn test_unknown_package() {
        let runner = FakeCommandRunner::new().with_program("dpkg");
        let probe = DpkgProbe::new(Arc::new(runner), "clang");

        assert!(matches!(
            probe.detect().unwrap(),
            Capability::Unavailable { .. }
        ));
    }

    #[test]
    fn test_no_package_database() {
        let probe = DpkgProbe::new(Arc::new(FakeCommandRunner::new()), "git");
        assert_eq!(probe.detect().unwrap(), Capability::Missing);
        assert_eq!(probe.package(), "git");
    }
}
