//! `build-docker` handler.

use anyhow::Result;
use buildprobe_core::{BuildDriver, ContainerBuilder, resolve_build_vendor};
use buildprobe_runtime::{DockerCli, DryRunBuilder, detect_system_vendor};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::commands::BuildArgs;
use crate::error::CliError;
use crate::presentation::print_build_summary;

/// Build the container image.
///
/// The positional vendor, when non-empty, replaces the detected one. It is
/// validated only here: an unsupported value fails with exit code 1 before
/// docker is started.
pub fn execute(ctx: &CliContext, args: &BuildArgs) -> Result<()> {
    let detection = detect_system_vendor(ctx.runner());
    let vendor = resolve_build_vendor(args.vendor.as_deref(), &detection);
    info!(vendor = %vendor, "Selected GPU vendor for build");

    let builder: Box<dyn ContainerBuilder> = if args.dry_run {
        Box::new(DryRunBuilder)
    } else {
        Box::new(DockerCli::new())
    };

    let plan = BuildDriver::new(builder.as_ref())
        .with_image(args.image.as_str())
        .with_dockerfile(args.dockerfile.clone())
        .with_context(args.context.clone())
        .run(&vendor)
        .map_err(CliError::from)?;

    print_build_summary(&plan, args.dry_run);
    Ok(())
}
