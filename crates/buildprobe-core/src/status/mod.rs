//! Status records and the status file format.

mod error;
pub mod format;
mod record;
mod types;
mod writer;

pub use error::StatusError;
pub use record::{StatusRecord, StatusReport};
pub use types::{CudaStatus, PackagesStatus, RustStatus, cuda_keys, packages_keys, rust_keys};
pub use writer::{read_record, render, write_status};
