//! System adapters for buildprobe.
//!
//! Implements the `buildprobe-core` ports against the real host: command
//! execution and PATH lookup, the concrete probes (`nvcc`, `nvidia-smi`,
//! `lspci`, `rustc`, `cargo`, `rustup`, `dpkg`), the probers that write
//! status files, and the docker build runner.
#![deny(unsafe_code)]

pub mod detect;
pub mod docker;
pub mod probes;
pub mod system;

// Re-export probers
pub use detect::{CudaProber, PackagesProber, RustProber, detect_system_vendor};

// Re-export container builders
pub use docker::{DockerCli, DryRunBuilder};

// Re-export the system command runner
pub use system::SystemCommandRunner;
