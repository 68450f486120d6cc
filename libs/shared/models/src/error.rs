use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl AppError {
    /// Failures that never reached a usable service answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::ExternalService(_) | AppError::Decode(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}
