//! Command runner implementation for buildprobe-runtime.
//!
//! This module provides the `SystemCommandRunner` which implements
//! `CommandRunner` from buildprobe-core by looking tools up on `PATH`
//! and running them with `std::process::Command`.

use std::process::Command;

use buildprobe_core::{CommandOutput, CommandRunner, ProbeError};
use tracing::debug;

/// Default implementation of `CommandRunner`.
///
/// Constructed in the CLI's bootstrap and shared by every probe.
///
/// # Example
///
/// ```ignore
/// use buildprobe_runtime::SystemCommandRunner;
/// use buildprobe_core::CommandRunner;
///
/// let runner = SystemCommandRunner::new();
/// let has_nvcc = runner.exists("nvcc");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    /// Create a new system command runner.
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn exists(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ProbeError> {
        debug!(program, ?args, "Running command");
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| ProbeError::Spawn {
                program: program.to_string(),
                reason: e.to_string(),
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonexistent_command() {
        let runner = SystemCommandRunner::new();
        assert!(!runner.exists("definitely_not_a_real_command_12345"));
        assert!(matches!(
            runner.run("definitely_not_a_real_command_12345", &[]),
            Err(ProbeError::Spawn { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captures_exit_status() {
        let runner = SystemCommandRunner::new();
        if runner.exists("sh") {
            let out = runner.run("sh", &["-c", "echo hello; exit 3"]).unwrap();
            assert!(!out.success);
            assert_eq!(out.code, Some(3));
            assert_eq!(out.first_line(), Some("hello"));
        }
    }
}
