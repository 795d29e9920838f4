//! `status` handler.

use std::path::Path;

use anyhow::Result;
use buildprobe_core::read_record;

use crate::error::CliError;
use crate::presentation::print_record;

/// Parse a key=value status file and print it.
pub fn execute(path: &Path) -> Result<()> {
    let record = read_record(path).map_err(CliError::from)?;
    print_record(&record);
    Ok(())
}
