use sea_orm::error::DbErr;
use thiserror::Error;

/// Application error taxonomy shared by the data-access, repository, mapping
/// and service layers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// A stored row violates a persistence invariant and cannot be mapped
    /// into a domain value.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Event error: {0}")]
    EventError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_include_context() {
        let err = AppError::NotFound("Coupon 42 not found".to_string());
        assert_eq!(err.to_string(), "Not found: Coupon 42 not found");

        let err = AppError::InvalidRecord("coupon 7 has no product id".to_string());
        assert_eq!(err.to_string(), "Invalid record: coupon 7 has no product id");
    }
}
