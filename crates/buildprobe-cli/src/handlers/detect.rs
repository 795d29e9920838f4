//! Prober handlers.
//!
//! Probers never fail because a tool is missing; the only error they
//! return is a status file that could not be written.

use anyhow::Result;
use buildprobe_core::ProbeConfig;
use buildprobe_runtime::{CudaProber, PackagesProber, RustProber};

use crate::bootstrap::CliContext;
use crate::commands::ProbeArgs;
use crate::error::CliError;
use crate::presentation::{print_cuda_status, print_packages_status, print_rust_status};

fn cuda(ctx: &CliContext, config: &ProbeConfig) -> Result<()> {
    let status = CudaProber::new(ctx.runner())
        .run(config)
        .map_err(CliError::from)?;
    print_cuda_status(&status, &config.cuda_status_path);
    Ok(())
}

fn rust(ctx: &CliContext, config: &ProbeConfig) -> Result<()> {
    let status = RustProber::new(ctx.runner())
        .run(config)
        .map_err(CliError::from)?;
    print_rust_status(&status, &config.rust_status_path);
    Ok(())
}

fn packages(ctx: &CliContext, config: &ProbeConfig) -> Result<()> {
    let status = PackagesProber::new(ctx.runner())
        .run(config)
        .map_err(CliError::from)?;
    print_packages_status(&status, &config.packages_status_path);
    Ok(())
}

/// Execute `detect-cuda`.
pub fn execute_cuda(ctx: &CliContext, args: &ProbeArgs) -> Result<()> {
    cuda(ctx, &args.to_config())
}

/// Execute `detect-rust`.
pub fn execute_rust(ctx: &CliContext, args: &ProbeArgs) -> Result<()> {
    rust(ctx, &args.to_config())
}

/// Execute `detect-packages`.
pub fn execute_packages(ctx: &CliContext, args: &ProbeArgs) -> Result<()> {
    packages(ctx, &args.to_config())
}

/// Execute `detect-all`: CUDA, then Rust, then packages, one config.
pub fn execute_all(ctx: &CliContext, args: &ProbeArgs) -> Result<()> {
    let config = args.to_config();
    cuda(ctx, &config)?;
    rust(ctx, &config)?;
    packages(ctx, &config)
}
