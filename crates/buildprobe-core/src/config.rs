//! Probe configuration.
//!
//! Every prober receives an explicit [`ProbeConfig`] instead of reading
//! fixed paths and environment variables itself. The CLI builds one from
//! flags and the `GPU_VENDOR` environment variable.

use std::path::{Path, PathBuf};

use strum_macros::{Display, EnumString};

/// Environment variable carrying the build vendor into the probers.
pub const GPU_VENDOR_ENV: &str = "GPU_VENDOR";

/// Vendor assumed when `GPU_VENDOR` is unset or empty.
pub const DEFAULT_VENDOR: &str = "none";

/// Default location of the CUDA status record.
pub const DEFAULT_CUDA_STATUS_PATH: &str = "/tmp/cuda_status";

/// Default location of the Rust toolchain status record.
pub const DEFAULT_RUST_STATUS_PATH: &str = "/tmp/rust_status";

/// Default location of the system packages status record.
pub const DEFAULT_PACKAGES_STATUS_PATH: &str = "/tmp/packages_status";

/// Default container image name used by the build driver.
pub const DEFAULT_IMAGE: &str = "kolibrie";

/// Maximum number of installed toolchain components listed.
pub const DEFAULT_COMPONENT_LIMIT: usize = 10;

/// System packages the container build needs.
pub const DEFAULT_REQUIRED_PACKAGES: &[&str] = &[
    "build-essential",
    "pkg-config",
    "libssl-dev",
    "curl",
    "git",
    "ca-certificates",
    "clang",
    "cmake",
];

/// On-disk encoding of a status record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
pub enum StatusFormat {
    /// Flat `KEY=VALUE` lines, compatible with shell consumers.
    #[default]
    #[strum(serialize = "env")]
    Env,
    /// Typed JSON document with a generation timestamp.
    #[strum(serialize = "json")]
    Json,
}

/// Configuration shared by all probers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Raw build vendor string, echoed verbatim into the records.
    pub vendor: String,
    /// Destination of the CUDA status record.
    pub cuda_status_path: PathBuf,
    /// Destination of the Rust status record.
    pub rust_status_path: PathBuf,
    /// Destination of the packages status record.
    pub packages_status_path: PathBuf,
    /// Packages checked by the package prober, in reporting order.
    pub required_packages: Vec<String>,
    /// Maximum number of toolchain components to list.
    pub component_limit: usize,
    /// Encoding used when writing records.
    pub format: StatusFormat,
}

impl ProbeConfig {
    /// Create config with the default paths and vendor.
    pub fn with_defaults() -> Self {
        Self {
            vendor: DEFAULT_VENDOR.to_string(),
            cuda_status_path: PathBuf::from(DEFAULT_CUDA_STATUS_PATH),
            rust_status_path: PathBuf::from(DEFAULT_RUST_STATUS_PATH),
            packages_status_path: PathBuf::from(DEFAULT_PACKAGES_STATUS_PATH),
            required_packages: DEFAULT_REQUIRED_PACKAGES
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            component_limit: DEFAULT_COMPONENT_LIMIT,
            format: StatusFormat::Env,
        }
    }

    /// Set the build vendor.
    #[must_use]
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    /// Place all three status records inside `dir`.
    #[must_use]
    pub fn with_status_dir(mut self, dir: &Path) -> Self {
        self.cuda_status_path = dir.join("cuda_status");
        self.rust_status_path = dir.join("rust_status");
        self.packages_status_path = dir.join("packages_status");
        self
    }

    /// Replace the required package list.
    #[must_use]
    pub fn with_required_packages<I, S>(mut self, packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_packages = packages.into_iter().map(Into::into).collect();
        self
    }

    /// Set the on-disk status format.
    #[must_use]
    pub const fn with_format(mut self, format: StatusFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Resolve a vendor value the way `${GPU_VENDOR:-none}` does: unset and
/// empty both fall back to [`DEFAULT_VENDOR`].
pub fn vendor_or_default(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => DEFAULT_VENDOR.to_string(),
    }
}
