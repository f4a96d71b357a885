//! Request extractors that report rejections as `ApiError` JSON

use axum::extract::{
    rejection::{JsonRejection, PathRejection, QueryRejection},
    FromRequest, FromRequestParts,
};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};

/// `axum::Json` with JSON error bodies on rejection
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with JSON error bodies on rejection
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// `axum::extract::Path` with JSON error bodies on rejection
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

/// Parses an id taken from a query string; blank counts as missing.
pub fn require_id(raw: Option<&str>, missing: &str) -> ApiResult<Uuid> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Err(ApiError::bad_request(missing)),
        Some(s) => {
            Uuid::parse_str(s).map_err(|_| ApiError::bad_request(format!("Invalid id: {s}")))
        }
    }
}

/// Parses an optional id filter; blank counts as absent.
pub fn optional_id(raw: Option<&str>) -> ApiResult<Option<Uuid>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => Uuid::parse_str(s)
            .map(Some)
            .map_err(|_| ApiError::bad_request(format!("Invalid id: {s}"))),
    }
}
