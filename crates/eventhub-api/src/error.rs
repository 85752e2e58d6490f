//! Maps domain errors to HTTP responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use eventhub_core::error::{AppError, ErrorKind};
use eventhub_service::event::FieldError;

/// Realm advertised when no configured realm is at hand.
pub const DEFAULT_REALM: &str = "eventhub";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Every way a handler can fail.
#[derive(Debug)]
pub enum ApiError {
    /// A domain error from the service layer.
    App(AppError),
    /// Field-level validation failures, rendered as a JSON array.
    Validation(Vec<FieldError>),
    /// Missing or bad credentials on a route that requires them.
    Unauthenticated {
        /// Realm for the `WWW-Authenticate` challenge.
        realm: String,
        /// Reason shown to the client.
        message: String,
    },
}

impl ApiError {
    /// Build a 401 challenge for the given realm.
    pub fn unauthenticated(realm: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            realm: realm.into(),
            message: message.into(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::App(AppError::validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::App(AppError::validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            Self::Unauthenticated { realm, message } => challenge(&realm, message),
            Self::App(err) if err.kind == ErrorKind::Authentication => {
                challenge(DEFAULT_REALM, err.message)
            }
            Self::App(err) => app_error_response(err),
        }
    }
}

fn challenge(realm: &str, message: String) -> Response {
    let mut response = (
        StatusCode::UNAUTHORIZED,
        Json(ApiErrorResponse {
            error: "UNAUTHORIZED".to_string(),
            message,
        }),
    )
        .into_response();

    if let Ok(value) = HeaderValue::from_str(&format!("Basic realm=\"{realm}\"")) {
        response.headers_mut().insert(header::WWW_AUTHENTICATE, value);
    }
    response
}

fn app_error_response(err: AppError) -> Response {
    let (status, error_code) = match err.kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => {
            tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    };

    // Internal details stay in the log.
    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        "Internal server error".to_string()
    } else {
        err.message
    };

    let body = ApiErrorResponse {
        error: error_code.to_string(),
        message,
    };

    (status, Json(body)).into_response()
}
