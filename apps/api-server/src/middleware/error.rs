//! Error translation - one place that turns failures into status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_shared::MessageResponse;
use std::fmt;

/// Body sent when a path id cannot be read as an id.
pub const ID_NOT_FOUND: &str = "ID를 찾을 수 없습니다";

/// Application-level error type.
///
/// Variants holding `None` produce a status-only response with an empty body.
#[derive(Debug)]
pub enum AppError {
    /// Schema violation on write: 400 with `{message}`.
    Validation(String),
    /// Malformed identifier: 404 with a fixed message.
    Cast,
    /// Request refused before reaching storage: 400.
    BadRequest(Option<String>),
    /// No entity under the given id: 404.
    NotFound(Option<String>),
    /// Anything else: 500 with `{message}`.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::Cast => write!(f, "Malformed id"),
            AppError::BadRequest(msg) => {
                write!(f, "Bad request: {}", msg.as_deref().unwrap_or("-"))
            }
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg.as_deref().unwrap_or("-")),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Cast | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Validation(detail) => Some(detail.as_str()),
            AppError::Cast => Some(ID_NOT_FOUND),
            AppError::BadRequest(detail) | AppError::NotFound(detail) => detail.as_deref(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                Some(detail.as_str())
            }
        };

        let mut response = HttpResponse::build(self.status_code());
        match message {
            Some(message) => response.json(MessageResponse::new(message)),
            None => response.finish(),
        }
    }
}

// Conversion from domain errors
impl From<blog_core::error::DomainError> for AppError {
    fn from(err: blog_core::error::DomainError) -> Self {
        match err {
            blog_core::error::DomainError::Validation(msg) => AppError::Validation(msg),
            blog_core::error::DomainError::Cast(raw) => {
                tracing::debug!(id = %raw, "Rejected malformed id");
                AppError::Cast
            }
        }
    }
}

impl From<blog_core::error::RepoError> for AppError {
    fn from(err: blog_core::error::RepoError) -> Self {
        match err {
            blog_core::error::RepoError::NotFound => AppError::NotFound(None),
            blog_core::error::RepoError::Constraint(msg) => AppError::Internal(msg),
            blog_core::error::RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal(format!("Database connection failed: {}", msg))
            }
            blog_core::error::RepoError::Query(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, String) {
        let response = err.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn test_validation_maps_to_400_with_message() {
        let (status, body) = body_of(AppError::Validation("title too long".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"message":"title too long"}"#);
    }

    #[actix_web::test]
    async fn test_cast_maps_to_404_with_fixed_message() {
        let err: AppError = blog_core::error::DomainError::Cast("xyz".into()).into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, format!(r#"{{"message":"{}"}}"#, ID_NOT_FOUND));
    }

    #[actix_web::test]
    async fn test_status_only_variants_have_empty_body() {
        let (status, body) = body_of(AppError::BadRequest(None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_empty());

        let (status, body) = body_of(AppError::NotFound(None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_repo_failures_map_to_500() {
        let err: AppError = blog_core::error::RepoError::Query("boom".into()).into();
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"message":"boom"}"#);
    }
}
