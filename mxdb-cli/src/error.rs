//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;

use mxdb_connect::ConnectError;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(mxdb::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(mxdb::config))]
    Config(String),

    /// Descriptor, credential, driver or authentication error
    #[error(transparent)]
    #[diagnostic(code(mxdb::connect))]
    Connect(#[from] ConnectError),

    /// Database command error
    #[error("Database error: {0}")]
    #[diagnostic(code(mxdb::database))]
    Database(String),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}
