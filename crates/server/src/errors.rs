use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const CONTACT_NOT_FOUND: &str = "Contact not found";
pub const CONTACT_EXISTS: &str = "Contact with email or phone number exists.";

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, error: error.into(), detail }
    }

    pub fn contact_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(CONTACT_NOT_FOUND.into()))
    }

    /// Duplicate email or phone number. Reported as 401 for compatibility with
    /// existing clients.
    pub fn contact_exists() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Duplicate Contact", Some(CONTACT_EXISTS.into()))
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(detail.into()))
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(detail.into()))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, detail = ?self.detail, "request failed");
        }
        let body = serde_json::json!({"error": self.error, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Duplicate(_) => Self::contact_exists(),
            ServiceError::Db(msg) => Self::internal(msg),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        match r.status() {
            StatusCode::UNPROCESSABLE_ENTITY => Self::validation(r.body_text()),
            status => Self::new(status, "Bad Request", Some(r.body_text())),
        }
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self {
        Self::new(r.status(), "Bad Request", Some(r.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
