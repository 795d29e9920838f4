//! Command runner port.
//!
//! Abstracts "is this tool on PATH" and "run it and capture the output"
//! so probes can be exercised against a scripted environment.

use thiserror::Error;

/// Errors that can occur while invoking an external tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The command could not be started at all.
    #[error("Failed to execute {program}: {reason}")]
    Spawn { program: String, reason: String },
}

/// Captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Whether the command exited with status zero.
    pub success: bool,
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

impl CommandOutput {
    /// A successful run printing `stdout`.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed run with the given exit code and error text.
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// The text a tool printed, preferring stdout.
    ///
    /// Some tools (older `nvcc`, BSD `make`) print their version banner on
    /// stderr, so an empty stdout falls back to stderr.
    pub fn text(&self) -> &str {
        if self.stdout.trim().is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }

    /// First non-empty trimmed line of [`Self::text`].
    pub fn first_line(&self) -> Option<&str> {
        self.text()
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
    }
}

/// Port for discovering and running external commands.
pub trait CommandRunner: Send + Sync {
    /// Whether `program` can be found on the search path.
    fn exists(&self, program: &str) -> bool;

    /// Run `program` with `args` to completion and capture its output.
    ///
    /// A non-zero exit is not an error; it is reported through
    /// [`CommandOutput::success`]. No timeout is applied.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ProbeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_prefers_stdout() {
        let out = CommandOutput {
            success: true,
            code: Some(0),
            stdout: "stdout line\n".to_string(),
            stderr: "stderr line\n".to_string(),
        };
        assert_eq!(out.first_line(), Some("stdout line"));
    }

    #[test]
    fn test_text_falls_back_to_stderr() {
        let out = CommandOutput {
            success: true,
            code: Some(0),
            stdout: "  \n".to_string(),
            stderr: "\nrelease 12.2\n".to_string(),
        };
        assert_eq!(out.first_line(), Some("release 12.2"));
    }

    #[test]
    fn test_first_line_empty_output() {
        assert_eq!(CommandOutput::success("").first_line(), None);
    }

    #[test]
    fn test_failure_constructor() {
        let out = CommandOutput::failure(9, "NVIDIA-SMI has failed");
        assert!(!out.success);
        assert_eq!(out.code, Some(9));
        assert_eq!(out.first_line(), Some("NVIDIA-SMI has failed"));
    }
}
