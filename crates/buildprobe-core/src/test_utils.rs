//! Scripted command runner for tests.
//!
//! Enabled for this crate's unit tests and for downstream crates through
//! the `test-utils` feature.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::ports::{CommandOutput, CommandRunner, ProbeError};

/// A [`CommandRunner`] that answers from a script instead of the system.
///
/// - Programs never registered do not exist and cannot be run.
/// - Registered programs answer scripted argument lists with their output
///   and every other invocation with exit code 1.
///
/// Every `run` call is recorded as `"program arg1 arg2"`.
#[derive(Debug, Default)]
pub struct FakeCommandRunner {
    programs: HashSet<String>,
    responses: HashMap<(String, Vec<String>), CommandOutput>,
    calls: Mutex<Vec<String>>,
}

impl FakeCommandRunner {
    /// An environment with no tools at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `program` discoverable without scripting any response.
    #[must_use]
    pub fn with_program(mut self, program: &str) -> Self {
        self.programs.insert(program.to_string());
        self
    }

    /// Make `program` discoverable and answer `args` with `output`.
    #[must_use]
    pub fn with_response(mut self, program: &str, args: &[&str], output: CommandOutput) -> Self {
        self.programs.insert(program.to_string());
        self.responses.insert(
            (
                program.to_string(),
                args.iter().map(|a| (*a).to_string()).collect(),
            ),
            output,
        );
        self
    }

    /// Invocations recorded so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Whether any invocation of `program` was recorded.
    pub fn was_called(&self, program: &str) -> bool {
        self.calls()
            .iter()
            .any(|c| c == program || c.starts_with(&format!("{program} ")))
    }
}

impl CommandRunner for FakeCommandRunner {
    fn exists(&self, program: &str) -> bool {
        self.programs.contains(program)
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ProbeError> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(line);
        }

        if !self.programs.contains(program) {
            return Err(ProbeError::Spawn {
                program: program.to_string(),
                reason: "No such file or directory (os error 2)".to_string(),
            });
        }

        let key = (
            program.to_string(),
            args.iter().map(|a| (*a).to_string()).collect::<Vec<_>>(),
        );
        Ok(self
            .responses
            .get(&key)
            .cloned()
            .unwrap_or_else(|| CommandOutput::failure(1, "")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unregistered_program() {
        let runner = FakeCommandRunner::new();
        assert!(!runner.exists("nvcc"));
        assert!(runner.run("nvcc", &["--version"]).is_err());
        assert!(runner.was_called("nvcc"));
    }

    #[test]
    fn test_scripted_and_default_responses() {
        let runner = FakeCommandRunner::new().with_response(
            "rustc",
            &["--version"],
            CommandOutput::success("rustc 1.85.0 (4d91de4e4 2025-02-17)\n"),
        );
        assert!(runner.exists("rustc"));
        assert!(runner.run("rustc", &["--version"]).unwrap().success);
        assert!(!runner.run("rustc", &["-vV"]).unwrap().success);
        assert_eq!(runner.calls(), vec!["rustc --version", "rustc -vV"]);
    }
}
