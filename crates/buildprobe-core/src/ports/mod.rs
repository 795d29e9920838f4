//! Port definitions for buildprobe.
//!
//! Core owns the traits; `buildprobe-runtime` owns the implementations
//! that touch the real system, and tests substitute fakes or mocks.

mod builder;
mod command;
mod probe;

pub use builder::{BuildError, ContainerBuilder};
pub use command::{CommandOutput, CommandRunner, ProbeError};
pub use probe::{Capability, Probe, observe};

#[cfg(test)]
pub use builder::MockContainerBuilder;
#[cfg(test)]
pub use probe::MockProbe;
