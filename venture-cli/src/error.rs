//! CLI error types

use thiserror::Error;

/// CLI errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl CliError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
