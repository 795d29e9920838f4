//! Generic "tool --version" probe and version extraction.

use std::sync::Arc;

use buildprobe_core::{Capability, CommandRunner, Probe, ProbeError};

/// Extracts a version from a tool's version banner.
pub type VersionParser = fn(&str) -> Option<String>;

/// Probe that checks a tool exists and asks it for its version.
///
/// A tool that is present but fails the version query is reported as
/// [`Capability::Unavailable`]; a tool whose banner cannot be parsed is
/// still available, just without a detail.
pub struct VersionProbe {
    runner: Arc<dyn CommandRunner>,
    program: &'static str,
    flag: &'static str,
    parse: VersionParser,
}

impl VersionProbe {
    /// Create a probe for `program flag`.
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        program: &'static str,
        flag: &'static str,
        parse: VersionParser,
    ) -> Self {
        Self {
            runner,
            program,
            flag,
            parse,
        }
    }

    /// `rustc --version`.
    pub fn rustc(runner: Arc<dyn CommandRunner>) -> Self {
        Self::new(runner, "rustc", "--version", second_word)
    }

    /// `cargo --version`.
    pub fn cargo(runner: Arc<dyn CommandRunner>) -> Self {
        Self::new(runner, "cargo", "--version", second_word)
    }

    /// `nvcc --version`.
    pub fn nvcc(runner: Arc<dyn CommandRunner>) -> Self {
        Self::new(runner, "nvcc", "--version", parse_nvcc_release)
    }
}

impl Probe for VersionProbe {
    fn detect(&self) -> Result<Capability, ProbeError> {
        if !self.runner.exists(self.program) {
            return Ok(Capability::Missing);
        }

        let output = self.runner.run(self.program, &[self.flag])?;
        if !output.success {
            return Ok(Capability::unavailable(format!(
                "{} {} exited with {:?}",
                self.program, self.flag, output.code
            )));
        }

        Ok(Capability::Available {
            detail: (self.parse)(output.text()),
        })
    }
}

/// "rustc 1.85.0 (4d91de4e4 2025-02-17)" -> "1.85.0"
pub fn second_word(text: &str) -> Option<String> {
    text.lines()
        .next()?
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
}

/// "Cuda compilation tools, release 12.2, V12.2.140" -> "12.2"
pub fn parse_nvcc_release(text: &str) -> Option<String> {
    let line = text.lines().find(|l| l.contains("release"))?;
    let version = line.split("release").nth(1)?;
    let version = version.trim().split(',').next()?.trim();
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildprobe_core::CommandOutput;
    use buildprobe_core::test_utils::FakeCommandRunner;

    const NVCC_BANNER: &str = "nvcc: NVIDIA (R) Cuda compiler driver\n\
Copyright (c) 2005-2023 NVIDIA Corporation\n\
Built on Tue_Aug_15_22:02:13_PDT_2023\n\
Cuda compilation tools, release 12.2, V12.2.140\n\
Build cuda_12.2.r12.2/compiler.33191640_0\n";

    #[test]
    fn test_parse_nvcc_release() {
        assert_eq!(parse_nvcc_release(NVCC_BANNER), Some("12.2".to_string()));
        assert_eq!(parse_nvcc_release("no version here"), None);
        assert_eq!(parse_nvcc_release("release ,"), None);
    }

    #[test]
    fn test_second_word() {
        assert_eq!(
            second_word("cargo 1.85.0 (d73d2caf9 2024-12-31)"),
            Some("1.85.0".to_string())
        );
        assert_eq!(second_word("cargo"), None);
    }

    #[test]
    fn test_missing_tool_is_not_run() {
        let runner = Arc::new(FakeCommandRunner::new());
        let probe = VersionProbe::nvcc(runner.clone());

        assert_eq!(probe.detect().unwrap(), Capability::Missing);
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_available_with_version() {
        let runner = Arc::new(FakeCommandRunner::new().with_response(
            "nvcc",
            &["--version"],
            CommandOutput::success(NVCC_BANNER),
        ));
        let probe = VersionProbe::nvcc(runner);

        assert_eq!(probe.detect().unwrap(), Capability::available("12.2"));
    }

    #[test]
    fn test_failing_version_query() {
        let runner = Arc::new(FakeCommandRunner::new().with_program("cargo"));
        let probe = VersionProbe::cargo(runner);

        assert!(matches!(
            probe.detect().unwrap(),
            Capability::Unavailable { .. }
        ));
    }
}
