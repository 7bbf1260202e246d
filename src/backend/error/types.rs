/**
 * Backend Error Types
 *
 * The single error type returned by API handlers. Each variant maps to a
 * fixed HTTP status; server faults carry their cause for logging but expose
 * only a generic message to callers.
 */
use axum::http::StatusCode;
use thiserror::Error;

/// Error returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected input (missing or malformed field)
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Bad credentials, invalid token, or missing identity
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Referenced record does not exist
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Uniqueness violation caught before storage
    #[error("conflict: {message}")]
    Conflict { message: String },

    /// Storage is not configured
    #[error("service unavailable: {message}")]
    Unavailable { message: String },

    /// Storage-layer failure (constraint violation, connection loss)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token issuing failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Any other server fault
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized { message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound { message: message.into() }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict { message: message.into() }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to return to the caller.
    ///
    /// Server faults are collapsed to a generic message; the underlying
    /// cause is only ever logged server-side.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Unavailable { message } => message.clone(),
            Self::Database(_) | Self::Hash(_) | Self::Token(_) | Self::Internal { .. } => {
                "internal server error".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("title must not be empty").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("invalid credentials").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::conflict("email already registered").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::unavailable("storage not configured").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_passes_through_caller_errors() {
        let error = ApiError::unauthorized("invalid credentials");
        assert_eq!(error.public_message(), "invalid credentials");
    }

    #[test]
    fn test_public_message_hides_storage_details() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.public_message(), "internal server error");
        assert!(!error.public_message().contains("row"));
    }
}
