use super::{get_global_config_dir, RecapConfig, CONFIG_FILE_STEM};
use crate::error::{ErrorCode, RecapError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Partial configuration as written in a file; absent keys leave lower layers alone
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    log_level: Option<String>,
    utc_offset: Option<String>,
    output: Option<super::OutputFormat>,
    pretty: Option<bool>,
}

impl ConfigLayer {
    fn apply(self, config: &mut RecapConfig) {
        if let Some(level) = self.log_level {
            config.log_level = Some(level);
        }
        if let Some(offset) = self.utc_offset {
            config.utc_offset = offset;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(pretty) = self.pretty {
            config.pretty = pretty;
        }
    }
}

/// Layers configuration from defaults, files and the environment.
///
/// Precedence, lowest first: defaults, the global `config.toml`, a project
/// file in the working directory, an explicit `--config` file, `RECAP_*`
/// environment variables.
pub struct ConfigLoader {
    global_dir: Option<PathBuf>,
    project_dir: PathBuf,
    explicit: Option<PathBuf>,
    read_env: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            global_dir: get_global_config_dir(),
            project_dir: PathBuf::from("."),
            explicit: None,
            read_env: true,
        }
    }

    pub fn with_global_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.global_dir = dir;
        self
    }

    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = dir.into();
        self
    }

    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    pub fn without_env(mut self) -> Self {
        self.read_env = false;
        self
    }

    pub fn load(&self) -> Result<RecapConfig> {
        let mut config = RecapConfig::new();

        if let Some(global) = self.global_dir.as_ref().map(|dir| dir.join("config.toml")) {
            if global.exists() {
                load_file(&global)?.apply(&mut config);
            }
        }

        if let Some(project) = self.project_file() {
            load_file(&project)?.apply(&mut config);
        }

        if let Some(explicit) = &self.explicit {
            if !explicit.exists() {
                return Err(RecapError::config_with_code(
                    ErrorCode::CONFIG_NOT_FOUND,
                    format!("Configuration file not found: {}", explicit.display()),
                    Some(explicit.clone()),
                ));
            }
            load_file(explicit)?.apply(&mut config);
        }

        if self.read_env {
            config.merge_env_vars()?;
        }

        config.validate()?;
        debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// First existing `proposal-recap.{toml,yml,yaml}` in the project directory
    fn project_file(&self) -> Option<PathBuf> {
        ["toml", "yml", "yaml"]
            .iter()
            .map(|ext| self.project_dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
            .find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_file(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path).map_err(|e| {
        RecapError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Cannot read configuration file {}", path.display()),
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let layer = match extension.as_str() {
        "toml" => toml::from_str(&content).map_err(|e| {
            RecapError::config_with_code(
                ErrorCode::CONFIG_INVALID_TOML,
                format!("Invalid TOML in {}", path.display()),
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?,
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| {
            RecapError::config_with_code(
                ErrorCode::CONFIG_INVALID_YAML,
                format!("Invalid YAML in {}", path.display()),
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?,
        other => {
            return Err(RecapError::config_with_code(
                ErrorCode::CONFIG_UNSUPPORTED_FORMAT,
                format!("Unsupported configuration extension '{other}'"),
                Some(path.to_path_buf()),
            ))
        }
    };

    debug!(path = %path.display(), "Read configuration layer");
    Ok(layer)
}
