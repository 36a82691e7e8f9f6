//! # REST API for Daily Entries
//!
//! - `GET /api/daily-entries/:year/:month` lists a month's entries by date
//! - `POST /api/daily-entry` upserts one date and returns the stored row

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{error, info, warn};

use crate::io::rest::{internal_error, mappers::daily_entry_mapper::DailyEntryMapper};
use crate::AppState;
use shared::{ApiError, DailyEntry, SaveDailyEntryRequest};

/// Create a router for daily entry APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/daily-entries/:year/:month", get(list_daily_entries))
        .route("/daily-entry", post(save_daily_entry))
}

/// List all entries of a month, oldest first.
///
/// Year and month are not range-checked; a month outside 1..=12 yields `[]`.
async fn list_daily_entries(
    State(state): State<AppState>,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> impl IntoResponse {
    let Path((year, month)) = match path {
        Ok(path) => path,
        Err(rejection) => {
            warn!("Rejected daily entries path: {}", rejection.body_text());
            return (StatusCode::BAD_REQUEST, Json(ApiError::new(rejection.body_text()))).into_response();
        }
    };
    info!("GET /api/daily-entries/{}/{}", year, month);

    match state.daily_entry_service.list_entries_for_month(year, month).await {
        Ok(entries) => {
            let dtos: Vec<DailyEntry> = entries.into_iter().map(DailyEntryMapper::to_dto).collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(e) => {
            error!("Error fetching daily entries: {:#}", e);
            internal_error()
        }
    }
}

/// Save (insert or update) the entry for one date
async fn save_daily_entry(
    State(state): State<AppState>,
    Json(request): Json<SaveDailyEntryRequest>,
) -> impl IntoResponse {
    info!("POST /api/daily-entry - request: {:?}", request);

    let command = match DailyEntryMapper::to_upsert_command(request) {
        Ok(command) => command,
        Err(e) => {
            warn!("Rejected daily entry: {}", e);
            return (StatusCode::BAD_REQUEST, Json(ApiError::new(e.to_string()))).into_response();
        }
    };

    match state.daily_entry_service.upsert_entry(command).await {
        Ok(entry) => (StatusCode::OK, Json(DailyEntryMapper::to_dto(entry))).into_response(),
        Err(e) => {
            error!("Error saving daily entry: {:#}", e);
            internal_error()
        }
    }
}
