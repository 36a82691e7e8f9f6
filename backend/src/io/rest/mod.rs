//! # REST API Interface Layer
//!
//! HTTP endpoints for the tracker. This layer only translates: it
//! deserializes requests, maps DTOs to domain commands, calls the services,
//! and turns results into status codes.
//!
//! ## Error Mapping
//!
//! - Validation failures → `400` with the validation message
//! - Any storage failure → `500` with a generic body; details go to the log

pub mod daily_entry_apis;
pub mod mappers;
pub mod newspaper_apis;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    Router,
};
use shared::ApiError;

use crate::AppState;

/// All routes served under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(daily_entry_apis::router())
        .merge(newspaper_apis::router())
}

pub(crate) fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError::internal())).into_response()
}
