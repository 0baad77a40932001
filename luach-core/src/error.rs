//! Error types for luach.

use thiserror::Error;

/// Errors that can occur in luach operations.
#[derive(Error, Debug)]
pub enum LuachError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Unknown language '{0}'. Expected 'en' or 'he'")]
    UnknownLocale(String),

    #[error("Unknown time zone '{0}'")]
    UnknownTimeZone(String),

    #[error("Invalid date '{0}'")]
    InvalidDate(String),

    #[error("Invalid value for '{name}': {value}")]
    InvalidParameter { name: String, value: String },

    #[error("Hebcal returned HTTP {status}")]
    Upstream { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ICS generation error: {0}")]
    IcsGenerate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LuachError {
    /// HTTP status an inbound endpoint should answer with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            LuachError::Upstream { status, .. } => *status,
            LuachError::Http(_) => 502,
            LuachError::CityNotFound(_)
            | LuachError::UnknownLocale(_)
            | LuachError::UnknownTimeZone(_)
            | LuachError::InvalidDate(_)
            | LuachError::InvalidParameter { .. } => 400,
            _ => 500,
        }
    }
}

/// Result type alias for luach operations.
pub type LuachResult<T> = Result<T, LuachError>;
