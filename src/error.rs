use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure kinds surfaced to the client, mirroring the callable-function
/// taxonomy: auth is checked first, then caller input, then everything
/// downstream collapses into `internal`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated(_) => "unauthenticated",
            ApiError::InvalidArgument(_) => "invalid-argument",
            ApiError::Internal(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "error": { "kind": self.kind(), "message": self.to_string() },
        });
        (self.status(), Json(body)).into_response()
    }
}

/// Success envelope shared by every endpoint.
#[derive(Debug, serde::Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub data: T,
}

pub fn success<T: serde::Serialize>(data: T) -> Json<ApiSuccess<T>> {
    Json(ApiSuccess {
        success: true,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_machine_readable() {
        assert_eq!(ApiError::Unauthenticated("x".into()).kind(), "unauthenticated");
        assert_eq!(ApiError::InvalidArgument("x".into()).kind(), "invalid-argument");
        assert_eq!(ApiError::Internal("x".into()).kind(), "internal");
    }

    #[test]
    fn statuses_match_kinds() {
        assert_eq!(
            ApiError::Unauthenticated("no".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidArgument("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
