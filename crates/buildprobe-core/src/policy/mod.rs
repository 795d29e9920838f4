//! Status reducers: fold probe outcomes into capability flags.
//!
//! These functions are pure apart from logging. They never touch the
//! filesystem and never fail; absent capabilities become cleared flags.

mod cuda;
mod packages;
mod rust;
mod vendor;

pub use cuda::{CudaProbes, evaluate_cuda};
pub use packages::evaluate_packages;
pub use rust::evaluate_rust;
pub use vendor::{VendorDetection, detect_vendor, resolve_build_vendor};
