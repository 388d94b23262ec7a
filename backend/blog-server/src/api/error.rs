//! REST API error types
//!
//! Every failure is rendered as `{ "error": <message>, "code": <CODE>, "field"?: <field> }`.

use blog_auth::AuthError;
use blog_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "TITLE_REQUIRED", "BAD_REQUEST")
    pub code: String,
    /// Request field the error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Business-rule or storage failure reported by a service
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Missing or invalid credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Malformed request body, query or path (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// No route matched (404)
    #[error("Route not found: {path} {location}")]
    RouteNotFound {
        path: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn route_not_found<S: Into<String>>(path: S) -> Self {
        ApiError::RouteNotFound {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Core(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn body(self) -> ApiErrorBody {
        match self {
            ApiError::Core(e) => {
                let field = match &e {
                    CoreError::Validation { field, .. } => field.map(String::from),
                    _ => None,
                };
                ApiErrorBody {
                    error: e.message().to_string(),
                    code: e.code().to_string(),
                    field,
                }
            }
            ApiError::Unauthorized { .. } => ApiErrorBody {
                error: "UNAUTHORIZED".into(),
                code: "UNAUTHORIZED".into(),
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                error: message,
                code: "BAD_REQUEST".into(),
                field: None,
            },
            ApiError::RouteNotFound { .. } => ApiErrorBody {
                error: "Not Found".into(),
                code: "NOT_FOUND".into(),
                field: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        ApiError::Unauthorized {
            message: format!("{} ({})", e, e.error_code()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    #[track_caller]
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
