//! Core domain types, ports and detection policy for buildprobe.
//!
//! This crate is pure: it owns the status record model, the key=value
//! status file format, the `Probe`/`CommandRunner`/`ContainerBuilder`
//! ports and the policy that folds probe results into capability flags.
//! Active probing (running `nvidia-smi`, `nvcc`, `dpkg`, `docker`) lives
//! in `buildprobe-runtime`.
#![deny(unused_crate_dependencies)]

pub mod build;
pub mod config;
pub mod policy;
pub mod ports;
pub mod status;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod vendor;

// Re-export commonly used types for convenience
pub use build::{BuildDriver, BuildPlan, DriverError};
pub use config::{
    DEFAULT_COMPONENT_LIMIT, DEFAULT_CUDA_STATUS_PATH, DEFAULT_IMAGE, DEFAULT_PACKAGES_STATUS_PATH,
    DEFAULT_REQUIRED_PACKAGES, DEFAULT_RUST_STATUS_PATH, DEFAULT_VENDOR, GPU_VENDOR_ENV,
    ProbeConfig, StatusFormat, vendor_or_default,
};
pub use policy::{
    CudaProbes, VendorDetection, detect_vendor, evaluate_cuda, evaluate_packages, evaluate_rust,
    resolve_build_vendor,
};
pub use ports::{
    BuildError, Capability, CommandOutput, CommandRunner, ContainerBuilder, Probe, ProbeError,
    observe,
};
pub use status::{
    CudaStatus, PackagesStatus, RustStatus, StatusError, StatusRecord, StatusReport, read_record,
    render, write_status,
};
pub use vendor::{BuildVendor, VendorError};
