//! Error types for Multitech

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Multitech operations
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Main error type for Multitech
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Unknown category '{0}'. Available categories: web, mobile, backend, database")]
    UnknownCategory(String),

    #[error("Unknown technology '{technology}'. Available: {available}")]
    UnknownTechnology { technology: String, available: String },

    #[error("Project directory already exists: {0}")]
    ProjectExists(PathBuf),

    #[error("Command `{command}` exited with status {status}")]
    CommandFailed { command: String, status: String },

    #[error("Could not start `{command}`: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Download failed for {url}: HTTP {status}")]
    Download { url: String, status: u16 },

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Timeout: container '{container}' did not become healthy within {seconds}s")]
    HealthTimeout { container: String, seconds: u64 },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScaffoldError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ScaffoldError::Config(msg.into())
    }

    /// Create a template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        ScaffoldError::Template(msg.into())
    }

    /// Create an archive error
    pub fn archive<S: Into<String>>(msg: S) -> Self {
        ScaffoldError::Archive(msg.into())
    }

    /// Whether the error comes from bad command-line input, in which case
    /// the usage text is worth showing
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            ScaffoldError::InvalidProjectName { .. }
                | ScaffoldError::MissingArgument(_)
                | ScaffoldError::UnknownCommand(_)
                | ScaffoldError::InvalidArguments(_)
                | ScaffoldError::UnknownCategory(_)
                | ScaffoldError::UnknownTechnology { .. }
        )
    }
}
