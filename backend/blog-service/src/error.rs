use async_graphql::ErrorExtensions;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    fn error_type(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// Errors cross the GraphQL boundary as entries in the response `errors`
// array; the machine-readable kind travels in the `error_type` extension.
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, e| e.set("error_type", self.error_type()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_codes() {
        assert_eq!(
            AppError::Validation("title".into()).error_type(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolClosed).error_type(),
            "DATABASE_ERROR"
        );
        assert_eq!(AppError::Config("x".into()).error_type(), "CONFIG_ERROR");
        assert_eq!(AppError::Internal("x".into()).error_type(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_extend_attaches_error_type() {
        let err = AppError::Validation("body must be a non-empty string".into()).extend();
        assert!(err.message.contains("body must be a non-empty string"));
        let extensions = err.extensions.expect("extensions should be set");
        assert_eq!(
            extensions.get("error_type"),
            Some(&async_graphql::Value::from("VALIDATION_ERROR"))
        );
    }
}
