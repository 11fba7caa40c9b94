use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use service::auth::errors::AuthError;
use service::ServiceError;

/// JSON error body: `{"error", "message", "code"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub message: String,
    pub code: u16,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: &'a str,
    code: u16,
}

/// `Json<T>` whose rejections answer with [`JsonApiError`].
pub type ApiJson<T> = WithRejection<Json<T>, JsonApiError>;
/// `Query<T>` whose rejections answer with [`JsonApiError`].
pub type ApiQuery<T> = WithRejection<axum::extract::Query<T>, JsonApiError>;
/// `Path<T>` whose rejections answer with [`JsonApiError`].
pub type ApiPath<T> = WithRejection<axum::extract::Path<T>, JsonApiError>;

impl JsonApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ServiceError::Authentication(message.into()).into()
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ServiceError::Validation(message.into()).into()
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { Self::bad_request(r.body_text()) }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::Conflict(_) => (StatusCode::CONFLICT, "Conflict"),
            ServiceError::Authentication(_) => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            ServiceError::Forbidden(_) => (StatusCode::FORBIDDEN, "Forbidden"),
            ServiceError::HasOpenReservations { .. } => (StatusCode::CONFLICT, "Open Reservations"),
            ServiceError::NoAvailability(_) => (StatusCode::NOT_FOUND, "No Availability"),
            ServiceError::Hash(_) | ServiceError::Token(_) | ServiceError::Db(_) => {
                error!(err = %e, code = e.code(), "internal service error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error")
            }
        };
        JsonApiError { status, title, message: e.to_string(), code: e.code() }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self { ServiceError::from(e).into() }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.title, message: &self.message, code: self.code };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
