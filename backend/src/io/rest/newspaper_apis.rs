//! # REST API for Newspapers
//!
//! Read-only listing of the reference table.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use crate::io::rest::{internal_error, mappers::newspaper_mapper::NewspaperMapper};
use crate::AppState;
use shared::Newspaper;

/// Create a router for newspaper APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/newspapers", get(list_newspapers))
}

async fn list_newspapers(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/newspapers");

    match state.newspaper_service.list_newspapers().await {
        Ok(newspapers) => {
            let dtos: Vec<Newspaper> = newspapers.into_iter().map(NewspaperMapper::to_dto).collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(e) => {
            error!("Error fetching newspapers: {:#}", e);
            internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::create_router;
    use crate::io::rest::test_support::{failing_state, test_state};

    #[tokio::test]
    async fn test_lists_seeded_newspapers() {
        let config = Config::default();
        let state = test_state().await;
        state.newspaper_service.seed(&config.newspapers).await.unwrap();
        let app = create_router(state, &config);

        let response = app
            .oneshot(Request::builder().uri("/api/newspapers").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!([
                { "id": 1, "name": "Aaj ka Anand", "price": 5.0 },
                { "id": 2, "name": "Times of India", "price": 7.0 }
            ])
        );
    }

    #[tokio::test]
    async fn test_storage_failure_is_a_generic_500() {
        let app = create_router(failing_state(), &Config::default());

        let response = app
            .oneshot(Request::builder().uri("/api/newspapers").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
