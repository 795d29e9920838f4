//! Persisting status records.
//!
//! A record is encoded completely before anything touches the disk, then
//! written to a sibling temporary file and renamed over the destination.
//! Readers see either the previous record or the new one, never a mix,
//! and keys from a previous run never survive.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use super::error::StatusError;
use super::format;
use super::record::{StatusRecord, StatusReport};
use crate::config::StatusFormat;

/// JSON export envelope.
#[derive(Serialize)]
struct JsonEnvelope<'a, R: Serialize> {
    kind: &'static str,
    generated_at: DateTime<Utc>,
    status: &'a R,
}

fn io_error(path: &Path, err: &std::io::Error) -> StatusError {
    StatusError::Io {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| "status".into(), |n| n.to_string_lossy().into_owned());
    path.with_file_name(format!(".{name}.tmp"))
}

fn remove_stale(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => warn!(path = %path.display(), "Removed stale status record"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove stale status record"),
    }
}

/// Render a report in the requested format.
pub fn render<R: StatusReport>(report: &R, encoding: StatusFormat) -> Result<String, StatusError> {
    match encoding {
        StatusFormat::Env => format::encode(&report.to_record()),
        StatusFormat::Json => {
            let envelope = JsonEnvelope {
                kind: R::KIND,
                generated_at: Utc::now(),
                status: report,
            };
            let mut text = serde_json::to_string_pretty(&envelope)
                .map_err(|e| StatusError::Serialize(e.to_string()))?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Write `report` to `path`, replacing whatever was there.
///
/// A report that cannot be encoded removes the previous record, so no
/// reader keeps acting on the last run's flags.
pub fn write_status<R: StatusReport>(
    path: &Path,
    report: &R,
    encoding: StatusFormat,
) -> Result<(), StatusError> {
    let content = match render(report, encoding) {
        Ok(content) => content,
        Err(err) => {
            remove_stale(path);
            return Err(err);
        }
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, &e))?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, content).map_err(|e| io_error(&tmp, &e))?;
    fs::rename(&tmp, path).map_err(|e| io_error(path, &e))?;

    debug!(path = %path.display(), kind = R::KIND, %encoding, "Wrote status record");
    Ok(())
}

/// Read and parse a `KEY=VALUE` status file.
pub fn read_record(path: &Path) -> Result<StatusRecord, StatusError> {
    let text = fs::read_to_string(path).map_err(|e| io_error(path, &e))?;
    format::parse(&text)
}
