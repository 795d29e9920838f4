//! `Probe` implementations backed by real tools.
//!
//! Every probe holds a shared `CommandRunner`, so the same probes run
//! against the system in production and against a script in tests.

mod gpu;
mod packages;
mod toolchain;
mod version;

pub use gpu::{LspciProbe, NvidiaSmiProbe};
pub use packages::DpkgProbe;
pub use toolchain::RustupComponentsProbe;
pub use version::{VersionParser, VersionProbe, parse_nvcc_release, second_word};
