//! Probers: run the system probes, apply the policy, persist the record.
//!
//! Each prober is one independent program step. It checks the host once,
//! writes its status file in full and never fails on a missing tool; only
//! an unwritable status path is an error.

mod cuda;
mod packages;
mod rust;
mod vendor;

pub use cuda::CudaProber;
pub use packages::PackagesProber;
pub use rust::RustProber;
pub use vendor::detect_system_vendor;
