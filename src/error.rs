use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything a handler can surface to a client. Controllers and services
/// never translate errors themselves; this type is the single point where an
/// internal failure becomes an HTTP-shaped body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error("Invalid object id")]
    InvalidId,
    #[error("Missing authorization header")]
    MissingAuthHeader,
    #[error("Invalid authorization header format")]
    InvalidAuthHeaderFormat,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Insufficient permissions")]
    Forbidden,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Email already registered")]
    DuplicateEmail,
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation failed"),
            ApiError::InvalidId => (StatusCode::BAD_REQUEST, "Invalid id"),
            ApiError::MissingAuthHeader => {
                (StatusCode::UNAUTHORIZED, "Missing authorization header")
            }
            ApiError::InvalidAuthHeaderFormat => {
                (StatusCode::UNAUTHORIZED, "Invalid authorization header format")
            }
            ApiError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            ApiError::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
            ApiError::DuplicateEmail => (StatusCode::CONFLICT, "Email already registered"),
            ApiError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        let body = match &self {
            ApiError::Validation(messages) => Json(json!({
                "error": error_message,
                "message": self.to_string(),
                "details": messages,
            })),
            _ => Json(json!({
                "error": error_message,
                "message": self.to_string(),
            })),
        };

        (status, body).into_response()
    }
}

/// Classify an error bubbled out of a service call, recognising the Mongo
/// duplicate-key failure behind the unique admin-email index.
pub fn map_database_error(err: anyhow::Error) -> ApiError {
    match err.downcast::<mongodb::error::Error>() {
        Ok(db_err) if is_duplicate_key(&db_err) => ApiError::DuplicateEmail,
        Ok(db_err) => ApiError::Database(db_err),
        Err(other) => ApiError::Internal(other),
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::Validation(vec!["Coach is required".to_string()]),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::InvalidId, StatusCode::BAD_REQUEST),
            (ApiError::MissingAuthHeader, StatusCode::UNAUTHORIZED),
            (ApiError::Forbidden, StatusCode::FORBIDDEN),
            (ApiError::NotFound("coach"), StatusCode::NOT_FOUND),
            (ApiError::DuplicateEmail, StatusCode::CONFLICT),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
