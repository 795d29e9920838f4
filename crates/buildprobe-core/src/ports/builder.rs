//! Container builder port.
//!
//! The build driver decides *what* to build; a `ContainerBuilder` decides
//! how to invoke the container tooling.

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

use crate::build::BuildPlan;

/// Errors from invoking the container build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The build command could not be started.
    #[error("Failed to run {program}: {reason}")]
    Spawn { program: String, reason: String },

    /// The build command ran and exited unsuccessfully.
    #[error("Container build failed (exit code: {code:?})")]
    Failed { code: Option<i32> },
}

/// Port for running a container image build.
#[cfg_attr(test, automock)]
pub trait ContainerBuilder: Send + Sync {
    /// Build the image described by `plan`, blocking until it finishes.
    fn build(&self, plan: &BuildPlan) -> Result<(), BuildError>;
}
