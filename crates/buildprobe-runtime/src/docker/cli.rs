//! Docker CLI builder with streamed output.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use buildprobe_core::{BuildError, BuildPlan, ContainerBuilder};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Render the full `docker build` invocation for display.
pub fn command_line(program: &str, plan: &BuildPlan) -> String {
    let mut line = program.to_string();
    for arg in plan.docker_args() {
        line.push(' ');
        if arg.contains(char::is_whitespace) {
            line.push_str(&format!("'{arg}'"));
        } else {
            line.push_str(&arg);
        }
    }
    line
}

/// Runs `docker build`, echoing its output above a spinner.
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: String,
}

impl DockerCli {
    pub fn new() -> Self {
        Self {
            program: "docker".to_string(),
        }
    }

    /// Use a different docker-compatible binary (e.g. `podman`).
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn spawn_error(&self, reason: impl Into<String>) -> BuildError {
        BuildError::Spawn {
            program: self.program.clone(),
            reason: reason.into(),
        }
    }
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

fn forward_lines<R: Read + Send + 'static>(source: R, tx: mpsc::Sender<String>) {
    thread::spawn(move || {
        let reader = BufReader::new(source);
        for line in reader.lines().map_while(Result::ok) {
            let _ = tx.send(line);
        }
    });
}

/// Show one line of build output.
///
/// A hidden bar (stderr is not a terminal) discards `println`, so the line
/// goes straight to stderr instead.
fn emit_line(pb: &ProgressBar, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    if pb.is_hidden() {
        eprintln!("{line}");
    } else {
        pb.println(line);
    }
}

impl ContainerBuilder for DockerCli {
    fn build(&self, plan: &BuildPlan) -> Result<(), BuildError> {
        debug!(command = %command_line(&self.program, plan), "Running container build command");

        let pb = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")
        {
            pb.set_style(style);
        }
        pb.set_message(format!("Building {}...", plan.primary_tag()));

        let mut child = Command::new(&self.program)
            .args(plan.docker_args())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e.to_string()))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| self.spawn_error("stdout not captured"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| self.spawn_error("stderr not captured"))?;

        let (tx, rx) = mpsc::channel();
        forward_lines(stdout, tx.clone());
        forward_lines(stderr, tx);

        // Ends once both readers hit EOF and drop their senders
        loop {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(line) => {
                    emit_line(&pb, &line);
                    pb.tick();
                }
                Err(mpsc::RecvTimeoutError::Timeout) => pb.tick(),
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            }
        }

        let status = child
            .wait()
            .map_err(|e| self.spawn_error(format!("failed to wait: {e}")))?;
        pb.finish_and_clear();

        if !status.success() {
            return Err(BuildError::Failed {
                code: status.code(),
            });
        }

        debug!(tags = ?plan.tags, "Container build finished");
        Ok(())
    }
}

/// Prints the build command instead of running it.
#[derive(Debug, Clone, Default)]
pub struct DryRunBuilder;

impl ContainerBuilder for DryRunBuilder {
    fn build(&self, plan: &BuildPlan) -> Result<(), BuildError> {
        println!("{}", command_line("docker", plan));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildprobe_core::BuildVendor;

    #[test]
    fn test_command_line() {
        let plan = BuildPlan::for_vendor(BuildVendor::Cpu, "kolibrie");
        let line = command_line("docker", &plan);

        assert!(line.starts_with("docker build -f Dockerfile --build-arg GPU_VENDOR=cpu"));
        assert!(line.contains("-t kolibrie:cpu -t kolibrie:none -t kolibrie:latest"));
        assert!(line.ends_with(" ."));
    }

    #[test]
    fn test_command_line_quotes_spaces() {
        let plan = BuildPlan::for_vendor(BuildVendor::Nvidia, "kolibrie")
            .with_context("/home/me/my project");
        assert!(command_line("docker", &plan).ends_with(" '/home/me/my project'"));
    }

    #[test]
    fn test_missing_binary_is_spawn_error() {
        let builder = DockerCli::new().with_program("definitely-not-a-docker-binary");
        let plan = BuildPlan::for_vendor(BuildVendor::NoGpu, "kolibrie");

        assert!(matches!(
            builder.build(&plan),
            Err(BuildError::Spawn { program, .. }) if program == "definitely-not-a-docker-binary"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_build_reports_exit_code() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let script = dir.path().join("fake-docker");
        std::fs::write(
            &script,
            "#!/bin/sh\necho \"Step 1/3 : FROM ubuntu:22.04\"\necho \"no space left on device\" >&2\nexit 7\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let builder = DockerCli::new().with_program(script.to_string_lossy());
        let plan = BuildPlan::for_vendor(BuildVendor::Cpu, "kolibrie");

        assert_eq!(builder.build(&plan), Err(BuildError::Failed { code: Some(7) }));
    }

    #[test]
    fn test_hidden_bar_line_is_not_lost() {
        // Must not panic or block without a terminal
        let pb = ProgressBar::hidden();
        assert!(pb.is_hidden());
        emit_line(&pb, "Step 2/3 : RUN cargo build --release");
        emit_line(&pb, "   ");
    }

    #[test]
    fn test_dry_run_succeeds() {
        let plan = BuildPlan::for_vendor(BuildVendor::Nvidia, "kolibrie");
        assert!(DryRunBuilder.build(&plan).is_ok());
    }
}
