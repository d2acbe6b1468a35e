use crate::domain::model::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgencyError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Submission rejected by server: {message}")]
    RejectedError {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("Server failed to process submission: {message}")]
    ServerError { message: String },
}

impl AgencyError {
    /// Field-level violations reported by the server, when this error
    /// carries any.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            AgencyError::RejectedError { errors, .. } => errors,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, AgencyError>;
