use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Chat error: {0}")]
    ChatError(String),

    #[error("Account error: {0}")]
    AccountError(String),

    #[error("Navigation error: {0}")]
    NavigationError(String),

    #[error("No active chat session")]
    NoActiveSession,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<crate::modules::config::ConfigError> for AppError {
    fn from(err: crate::modules::config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<crate::modules::chat::ApplicationError> for AppError {
    fn from(err: crate::modules::chat::ApplicationError) -> Self {
        AppError::ChatError(err.to_string())
    }
}

impl From<crate::modules::account::AccountError> for AppError {
    fn from(err: crate::modules::account::AccountError) -> Self {
        AppError::AccountError(err.to_string())
    }
}

impl From<crate::modules::navigation::NavigationError> for AppError {
    fn from(err: crate::modules::navigation::NavigationError) -> Self {
        AppError::NavigationError(err.to_string())
    }
}

impl From<crate::infrastructure::HttpError> for AppError {
    fn from(err: crate::infrastructure::HttpError) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_serializes_as_message() {
        let err = AppError::NoActiveSession;
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"No active chat session\"");
    }
}
