//! Command implementation modules
//!
//! Each command reads the proposal document once, evaluates it against a
//! single instant and writes its report to the given writer.

pub mod activities;
pub mod inspect;
pub mod rupiah;
pub mod summarize;

pub use activities::run_activities_command;
pub use inspect::run_inspect_command;
pub use rupiah::run_rupiah_command;
pub use summarize::run_summarize_command;

use crate::config::RecapConfig;
use crate::error::{ErrorCode, RecapError, Result};
use crate::proposal::{decode_str, parse_timestamp_str, DecodeOptions, Proposal};
use chrono::{DateTime, Utc};
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Path meaning "read standard input"
pub const STDIN_PATH: &str = "-";

/// Read the whole input document
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map_err(|e| {
            RecapError::input_with_code(
                ErrorCode::INPUT_READ_FAILED,
                "Failed to read standard input",
                None,
            )
            .with_source(e)
        })?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|e| {
        let code = if e.kind() == ErrorKind::NotFound {
            ErrorCode::INPUT_NOT_FOUND
        } else {
            ErrorCode::INPUT_READ_FAILED
        };
        RecapError::input_with_code(
            code,
            format!("Cannot read {}", path.display()),
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })
}

/// Read and decode the proposals at `path` using the configured offset
pub fn load_proposals(path: &Path, config: &RecapConfig) -> Result<Vec<Proposal>> {
    let options = DecodeOptions {
        utc_offset: config.offset()?,
    };
    let text = read_input(path)?;
    let proposals = decode_str(&text, &options)?;
    debug!(path = %path.display(), proposals = proposals.len(), "Loaded proposals");
    Ok(proposals)
}

/// The instant every lifecycle state of this run is evaluated against.
///
/// The wall clock is read here, once, when `--now` is not given.
pub fn evaluation_instant(now: Option<&str>, config: &RecapConfig) -> Result<DateTime<Utc>> {
    let Some(text) = now else {
        return Ok(Utc::now());
    };
    parse_timestamp_str(text, config.offset()?).ok_or_else(|| {
        RecapError::input_with_code(
            ErrorCode::INPUT_INVALID_TIMESTAMP,
            format!("Cannot parse --now '{text}' as a timestamp"),
            None,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_missing_input_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_input(&dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_NOT_FOUND);
    }

    #[test]
    fn test_evaluation_instant_uses_offset() {
        let config = RecapConfig {
            utc_offset: "+07:00".into(),
            ..RecapConfig::default()
        };
        let now = evaluation_instant(Some("2024-03-01 07:00"), &config).unwrap();
        assert_eq!(now, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());

        let err = evaluation_instant(Some("yesterday"), &config).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INPUT_INVALID_TIMESTAMP);
    }

    #[test]
    fn test_load_proposals_reports_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_proposals(&path, &RecapConfig::default()).unwrap_err();
        assert_eq!(err.code(), ErrorCode::DECODE_INVALID_JSON);
    }
}
