use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for proposal-recap
///
/// Only the boundary layers return it. The aggregation engine itself is total
/// over its input domain and never fails.
#[derive(Error, Debug)]
pub enum RecapError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Input error: {message}")]
    Input {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Decode error: {message}")]
    Decode {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Render error: {message}")]
    Render {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RecapError {
    /// Create a configuration error with specific code and offending file
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create an input error with specific code and path
    pub fn input_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Input {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a decode error with specific code
    pub fn decode_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Decode {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create a render error with specific code
    pub fn render_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Render {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach an underlying cause
    pub fn with_source(mut self, cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        let slot = match &mut self {
            Self::Config { source, .. }
            | Self::Input { source, .. }
            | Self::Decode { source, .. }
            | Self::Render { source, .. } => source,
        };
        *slot = Some(cause.into());
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Input { code, .. }
            | Self::Decode { code, .. }
            | Self::Render { code, .. } => *code,
        }
    }

    /// Check if the error was caused by a bad user-supplied value
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Input { .. } | Self::Decode { .. })
    }

    /// Get a user-friendly message including the code description
    pub fn user_message(&self) -> String {
        format!("{} ({})", self, describe_error_code(self.code()))
    }
}

pub type Result<T> = std::result::Result<T, RecapError>;
