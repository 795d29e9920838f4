//! Subcommands and their shared argument groups.

use std::path::PathBuf;

use buildprobe_core::{
    DEFAULT_CUDA_STATUS_PATH, DEFAULT_IMAGE, DEFAULT_PACKAGES_STATUS_PATH,
    DEFAULT_RUST_STATUS_PATH, GPU_VENDOR_ENV, ProbeConfig, StatusFormat, vendor_or_default,
};
use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Detect the host GPU vendor without building anything
    DetectVendor,

    /// Check CUDA toolkit and GPU runtime access, write the CUDA status file
    DetectCuda {
        #[command(flatten)]
        probe: ProbeArgs,
    },

    /// Check for rustc and cargo, write the Rust status file
    DetectRust {
        #[command(flatten)]
        probe: ProbeArgs,
    },

    /// Check required system packages, write the packages status file
    DetectPackages {
        #[command(flatten)]
        probe: ProbeArgs,
    },

    /// Run the CUDA, Rust and package checks in sequence
    DetectAll {
        #[command(flatten)]
        probe: ProbeArgs,
    },

    /// Build the container image for the detected (or given) GPU vendor
    BuildDocker {
        #[command(flatten)]
        build: BuildArgs,
    },

    /// Print a key=value status file
    Status {
        /// Path to the status file
        path: PathBuf,
    },
}

/// Arguments shared by all probers.
#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Build vendor (nvidia, none, cpu); unset or empty means "none"
    #[arg(long, env = GPU_VENDOR_ENV)]
    pub vendor: Option<String>,

    /// Where to write the CUDA status file
    #[arg(long = "cuda-status", default_value = DEFAULT_CUDA_STATUS_PATH)]
    pub cuda_status: PathBuf,

    /// Where to write the Rust status file
    #[arg(long = "rust-status", default_value = DEFAULT_RUST_STATUS_PATH)]
    pub rust_status: PathBuf,

    /// Where to write the packages status file
    #[arg(long = "packages-status", default_value = DEFAULT_PACKAGES_STATUS_PATH)]
    pub packages_status: PathBuf,

    /// Status file format: "env" (KEY=VALUE lines) or "json"
    #[arg(long, default_value_t = StatusFormat::Env)]
    pub format: StatusFormat,

    /// Comma-separated package list replacing the default one
    #[arg(long = "packages", value_delimiter = ',', value_parser = parse_package_name)]
    pub packages: Vec<String>,
}

/// Accept a package name that survives the space-separated
/// `MISSING_PACKAGES` list unchanged.
fn parse_package_name(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err("package name must not be empty".to_string());
    }
    if value.chars().any(char::is_whitespace) {
        return Err(format!("package name {value:?} must not contain whitespace"));
    }
    Ok(value.to_string())
}

impl ProbeArgs {
    /// Build the prober configuration from these arguments.
    pub fn to_config(&self) -> ProbeConfig {
        let mut config = ProbeConfig::with_defaults()
            .with_vendor(vendor_or_default(self.vendor.as_deref()))
            .with_format(self.format);
        config.cuda_status_path.clone_from(&self.cuda_status);
        config.rust_status_path.clone_from(&self.rust_status);
        config.packages_status_path.clone_from(&self.packages_status);

        if !self.packages.is_empty() {
            config = config.with_required_packages(self.packages.iter().cloned());
        }
        config
    }
}

/// Arguments for `build-docker`.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Vendor override (nvidia, none, cpu); detected when omitted
    pub vendor: Option<String>,

    /// Image name, without tag
    #[arg(long, default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Dockerfile to build
    #[arg(long, default_value = "Dockerfile")]
    pub dockerfile: PathBuf,

    /// Build context directory
    #[arg(long, default_value = ".")]
    pub context: PathBuf,

    /// Print the docker command instead of running it
    #[arg(long)]
    pub dry_run: bool,
}
