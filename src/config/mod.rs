use crate::error::{ErrorCode, RecapError, Result};
use chrono::FixedOffset;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// File name looked up in the global config directory and the working directory
pub const CONFIG_FILE_STEM: &str = "proposal-recap";

/// Get the global directory holding `config.toml`
pub fn get_global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("id", "recap", CONFIG_FILE_STEM).map(|dirs| dirs.config_dir().to_path_buf())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    #[default]
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = RecapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            other => Err(RecapError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("unknown output format '{other}' (expected json, csv or table)"),
                None,
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecapConfig {
    /// Overrides the verbosity chosen with `-v`
    pub log_level: Option<String>,
    /// Offset applied to timestamps without a zone, as `±HH:MM`
    pub utc_offset: String,
    pub output: OutputFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for RecapConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            utc_offset: "+00:00".to_string(),
            output: OutputFormat::default(),
            pretty: true,
        }
    }
}

impl RecapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay `RECAP_*` environment variables
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup, used with a fake environment in tests
    pub fn merge_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(level) = lookup("RECAP_LOG_LEVEL") {
            self.log_level = Some(level);
        }

        if let Some(offset) = lookup("RECAP_UTC_OFFSET") {
            self.utc_offset = offset;
        }

        if let Some(output) = lookup("RECAP_OUTPUT") {
            self.output = output.parse()?;
        }

        if let Some(pretty) = lookup("RECAP_PRETTY") {
            self.pretty = pretty.parse::<bool>().map_err(|e| {
                RecapError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("RECAP_PRETTY must be true or false, got '{pretty}'"),
                    None,
                )
                .with_source(e)
            })?;
        }

        Ok(())
    }

    /// Check every field, reporting the first invalid one
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = &self.log_level {
            if !VALID_LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(RecapError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!(
                        "invalid log_level '{level}', expected one of {}",
                        VALID_LOG_LEVELS.join(", ")
                    ),
                    None,
                ));
            }
        }
        self.offset().map(|_| ())
    }

    /// The configured UTC offset
    pub fn offset(&self) -> Result<FixedOffset> {
        self.utc_offset.trim().parse::<FixedOffset>().map_err(|e| {
            RecapError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("invalid utc_offset '{}', expected ±HH:MM", self.utc_offset),
                None,
            )
            .with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = RecapConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.output, OutputFormat::Table);
        assert_eq!(config.offset().unwrap().local_minus_utc(), 0);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = RecapConfig::new();
        config
            .merge_env_with(env(&[
                ("RECAP_LOG_LEVEL", "debug"),
                ("RECAP_UTC_OFFSET", "+07:00"),
                ("RECAP_OUTPUT", "CSV"),
                ("RECAP_PRETTY", "false"),
            ]))
            .unwrap();

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.offset().unwrap().local_minus_utc(), 7 * 3600);
        assert_eq!(config.output, OutputFormat::Csv);
        assert!(!config.pretty);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let mut config = RecapConfig::new();
        let err = config
            .merge_env_with(env(&[("RECAP_OUTPUT", "xml")]))
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);

        let config = RecapConfig {
            log_level: Some("loud".into()),
            ..RecapConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RecapConfig {
            utc_offset: "WIB".into(),
            ..RecapConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
