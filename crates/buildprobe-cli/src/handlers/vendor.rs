//! `detect-vendor` handler.

use anyhow::Result;
use buildprobe_runtime::detect_system_vendor;

use crate::bootstrap::CliContext;
use crate::presentation::print_vendor;

/// Print the detected host GPU vendor.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let detection = detect_system_vendor(ctx.runner());
    print_vendor(&detection);
    Ok(())
}
