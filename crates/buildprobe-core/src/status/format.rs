//! Line-oriented `KEY=VALUE` encoding.
//!
//! One pair per line, newline-terminated, no quoting and no escaping.
//! Keys never contain `=`, so the first `=` on a line always splits key
//! from value and values may contain further `=` characters. Line breaks
//! in a value are rejected at encode time.

use super::error::StatusError;
use super::record::StatusRecord;

fn validate_key(key: &str) -> Result<(), StatusError> {
    if key.is_empty() || key.contains('=') || key.chars().any(char::is_whitespace) {
        return Err(StatusError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(())
}

fn validate_value(key: &str, value: &str) -> Result<(), StatusError> {
    if value.contains(['\n', '\r']) {
        return Err(StatusError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Encode a record as `KEY=VALUE` lines.
pub fn encode(record: &StatusRecord) -> Result<String, StatusError> {
    let mut out = String::new();
    for (key, value) in record.iter() {
        validate_key(key)?;
        validate_value(key, value)?;
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    Ok(out)
}

/// Parse `KEY=VALUE` lines. Blank lines are skipped; the first `=` splits
/// key from value.
pub fn parse(text: &str) -> Result<StatusRecord, StatusError> {
    let mut record = StatusRecord::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(StatusError::MalformedLine {
                line_no: idx + 1,
                line: line.to_string(),
            });
        };
        validate_key(key)?;
        record.set(key, value);
    }
    Ok(record)
}
