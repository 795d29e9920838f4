//! Build vendor selection.
//!
//! The build vendor names the GPU ecosystem a container image is built
//! for. Only three values are supported; everything else is rejected by
//! the build driver and downgraded to a CPU-only build by the probers.

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

/// GPU ecosystem selected for a container image build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum BuildVendor {
    /// NVIDIA GPU build with the CUDA toolchain.
    #[strum(serialize = "nvidia")]
    Nvidia,
    /// No GPU; the default when nothing is detected.
    #[strum(serialize = "none")]
    NoGpu,
    /// Explicit CPU-only build.
    #[strum(serialize = "cpu")]
    Cpu,
}

/// Errors raised when a vendor string cannot be used for a build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VendorError {
    /// The vendor string is not one of the supported values.
    #[error("Unsupported GPU vendor '{value}'. Supported vendors: {supported}")]
    Unsupported { value: String, supported: String },
}

impl BuildVendor {
    /// Parse a vendor string, producing a user-facing error on failure.
    ///
    /// Matching is exact: `NVIDIA` is not `nvidia`.
    pub fn parse(value: &str) -> Result<Self, VendorError> {
        Self::from_str(value).map_err(|_| VendorError::Unsupported {
            value: value.to_string(),
            supported: Self::supported_list(),
        })
    }

    /// Whether this vendor selects a GPU-enabled build.
    pub const fn is_gpu(self) -> bool {
        matches!(self, Self::Nvidia)
    }

    /// Comma-separated list of supported vendor strings.
    pub fn supported_list() -> String {
        Self::iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_vendors() {
        assert_eq!(BuildVendor::parse("nvidia"), Ok(BuildVendor::Nvidia));
        assert_eq!(BuildVendor::parse("none"), Ok(BuildVendor::NoGpu));
        assert_eq!(BuildVendor::parse("cpu"), Ok(BuildVendor::Cpu));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(BuildVendor::parse("NVIDIA").is_err());
        assert!(BuildVendor::parse("").is_err());
    }

    #[test]
    fn test_unsupported_error_lists_vendors() {
        let err = BuildVendor::parse("amd").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'amd'"));
        assert!(msg.contains("nvidia, none, cpu"));
    }

    #[test]
    fn test_display_round_trips() {
        for vendor in BuildVendor::iter() {
            assert_eq!(BuildVendor::parse(&vendor.to_string()), Ok(vendor));
        }
    }

    #[test]
    fn test_only_nvidia_is_gpu() {
        assert!(BuildVendor::Nvidia.is_gpu());
        assert!(!BuildVendor::NoGpu.is_gpu());
        assert!(!BuildVendor::Cpu.is_gpu());
    }
}
