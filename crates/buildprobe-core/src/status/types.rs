//! Typed status records for each concern.

use serde::{Deserialize, Serialize};

use super::error::StatusError;
use super::record::{StatusRecord, StatusReport};

/// Keys of the CUDA status record.
pub mod cuda_keys {
    pub const CAPABLE: &str = "CUDA_CAPABLE";
    pub const ALREADY_INSTALLED: &str = "CUDA_ALREADY_INSTALLED";
    pub const RUNTIME_AVAILABLE: &str = "CUDA_RUNTIME_AVAILABLE";
    pub const BUILD_GPU_VENDOR: &str = "BUILD_GPU_VENDOR";
}

/// Keys of the Rust status record.
pub mod rust_keys {
    pub const ALREADY_INSTALLED: &str = "RUST_ALREADY_INSTALLED";
}

/// Keys of the packages status record.
pub mod packages_keys {
    pub const NEED_INSTALL: &str = "PACKAGES_NEED_INSTALL";
    pub const MISSING_PACKAGES: &str = "MISSING_PACKAGES";
    pub const GPU_VENDOR: &str = "GPU_VENDOR";
}

/// CUDA toolkit and GPU runtime status.
///
/// `toolkit_version` and `gpu_name` are diagnostics; they appear in the
/// JSON export only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CudaStatus {
    /// CUDA may be used for this build.
    pub capable: bool,
    /// A CUDA compiler toolchain is installed.
    pub already_installed: bool,
    /// GPU access is expected at runtime.
    pub runtime_available: bool,
    /// Build vendor exactly as supplied.
    pub build_gpu_vendor: String,
    /// Version reported by the CUDA compiler, when found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolkit_version: Option<String>,
    /// Device name reported by the GPU query tool, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_name: Option<String>,
}

impl CudaStatus {
    /// All flags cleared for `vendor`.
    pub fn disabled(vendor: impl Into<String>) -> Self {
        Self {
            capable: false,
            already_installed: false,
            runtime_available: false,
            build_gpu_vendor: vendor.into(),
            toolkit_version: None,
            gpu_name: None,
        }
    }
}

impl StatusReport for CudaStatus {
    const KIND: &'static str = "cuda";

    fn to_record(&self) -> StatusRecord {
        let mut record = StatusRecord::new();
        record.set_flag(cuda_keys::CAPABLE, self.capable);
        record.set_flag(cuda_keys::ALREADY_INSTALLED, self.already_installed);
        record.set_flag(cuda_keys::RUNTIME_AVAILABLE, self.runtime_available);
        record.set(cuda_keys::BUILD_GPU_VENDOR, self.build_gpu_vendor.clone());
        record
    }

    fn from_record(record: &StatusRecord) -> Result<Self, StatusError> {
        Ok(Self {
            capable: record.flag(cuda_keys::CAPABLE)?,
            already_installed: record.flag(cuda_keys::ALREADY_INSTALLED)?,
            runtime_available: record.flag(cuda_keys::RUNTIME_AVAILABLE)?,
            build_gpu_vendor: record.require(cuda_keys::BUILD_GPU_VENDOR)?.to_string(),
            toolkit_version: None,
            gpu_name: None,
        })
    }
}

/// Rust toolchain status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RustStatus {
    /// Both `rustc` and `cargo` were found.
    pub already_installed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rustc_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cargo_version: Option<String>,
    /// Installed components, bounded by the configured limit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
}

impl StatusReport for RustStatus {
    const KIND: &'static str = "rust";

    fn to_record(&self) -> StatusRecord {
        let mut record = StatusRecord::new();
        record.set_flag(rust_keys::ALREADY_INSTALLED, self.already_installed);
        record
    }

    fn from_record(record: &StatusRecord) -> Result<Self, StatusError> {
        Ok(Self {
            already_installed: record.flag(rust_keys::ALREADY_INSTALLED)?,
            ..Self::default()
        })
    }
}

/// System package status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagesStatus {
    /// Packages in input order that the package database did not report
    /// as installed.
    pub missing: Vec<String>,
    /// Build vendor exactly as supplied.
    pub gpu_vendor: String,
}

impl PackagesStatus {
    /// True iff at least one package is missing.
    pub fn need_install(&self) -> bool {
        !self.missing.is_empty()
    }
}

impl StatusReport for PackagesStatus {
    const KIND: &'static str = "packages";

    fn to_record(&self) -> StatusRecord {
        let mut record = StatusRecord::new();
        record.set_flag(packages_keys::NEED_INSTALL, self.need_install());
        if self.need_install() {
            record.set(packages_keys::MISSING_PACKAGES, self.missing.join(" "));
        }
        record.set(packages_keys::GPU_VENDOR, self.gpu_vendor.clone());
        record
    }

    fn from_record(record: &StatusRecord) -> Result<Self, StatusError> {
        let need_install = record.flag(packages_keys::NEED_INSTALL)?;
        let missing: Vec<String> = record
            .get(packages_keys::MISSING_PACKAGES)
            .map(|list| list.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        if need_install == missing.is_empty() {
            return Err(StatusError::InvalidFlag {
                key: packages_keys::NEED_INSTALL.to_string(),
                value: if need_install { "1" } else { "0" }.to_string(),
            });
        }
        Ok(Self {
            missing,
            gpu_vendor: record.require(packages_keys::GPU_VENDOR)?.to_string(),
        })
    }
}
