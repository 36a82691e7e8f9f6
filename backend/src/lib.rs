//! # Newspaper Tracker Backend
//!
//! The entry store for the newspaper bill tracker: one row per calendar date
//! with two prices and their total, plus a static newspaper listing.
//!
//! ## Architecture
//!
//! ```text
//! Calendar view (Yew frontend)
//!     ↓  HTTP/JSON
//! IO Layer (axum REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (services, validation)
//!     ↓
//! Storage Layer (SQLite via sqlx)
//! ```
//!
//! Requests are independent and stateless. The only atomicity is the
//! single-statement upsert.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::domain::{DailyEntryService, NewspaperService};
use crate::storage::{DailyEntryRepository, DbConnection, NewspaperRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub daily_entry_service: DailyEntryService,
    pub newspaper_service: NewspaperService,
}

/// Initialize the backend with all required services.
///
/// A database that cannot be reached is logged, not fatal: the server still
/// starts and each request reports its own failure.
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::connect_lazy(&config.database_url)?;
    let db_ready = match db_conn.bootstrap().await {
        Ok(()) => true,
        Err(e) => {
            error!("Database connection error: {:#}", e);
            false
        }
    };

    info!("Setting up domain model");
    let daily_entry_service =
        DailyEntryService::new(Arc::new(DailyEntryRepository::new(db_conn.clone())));
    let newspaper_service = NewspaperService::new(Arc::new(NewspaperRepository::new(db_conn)));

    if db_ready {
        if let Err(e) = newspaper_service.seed(&config.newspapers).await {
            error!("Failed to seed newspapers: {:#}", e);
        }
    }

    Ok(AppState {
        daily_entry_service,
        newspaper_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    let origin = match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => AllowOrigin::exact(origin),
        Err(_) => {
            warn!(origin = %config.cors_origin, "Invalid CORS origin, allowing any origin");
            AllowOrigin::any()
        }
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/health", get(health))
        .nest("/api", io::api_router());

    if let Some(static_dir) = &config.static_dir {
        info!(path = %static_dir.display(), "Serving frontend files");
        router = router.fallback_service(ServeDir::new(static_dir));
    }

    router.layer(cors).with_state(app_state)
}

async fn health() -> &'static str {
    "Backend is running"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::io::rest::test_support::{failing_state, test_state};

    #[tokio::test]
    async fn test_health_answers_without_database() {
        let app = create_router(failing_state(), &Config::default());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"Backend is running");
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let app = create_router(test_state().await, &Config::default());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/daily-entries/2024/3")
                    .header(header::ORIGIN, "http://localhost:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:8080"
        );
    }

    #[tokio::test]
    async fn test_serves_static_frontend_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>tracker</html>").unwrap();
        let config = Config {
            static_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        let app = create_router(test_state().await, &config);

        let response = app
            .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<html>tracker</html>");
    }

    #[tokio::test]
    async fn test_initialize_backend_survives_unreachable_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            database_url: format!("sqlite://{}", dir.path().display()),
            ..Config::default()
        };

        let state = initialize_backend(&config).await.expect("Startup should not fail");
        assert!(state.newspaper_service.list_newspapers().await.is_err());
    }

    #[tokio::test]
    async fn test_initialize_backend_seeds_newspapers() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            database_url: format!("sqlite://{}", dir.path().join("tracker.db").display()),
            ..Config::default()
        };

        let state = initialize_backend(&config).await.unwrap();
        let newspapers = state.newspaper_service.list_newspapers().await.unwrap();
        assert_eq!(newspapers.len(), 2);
    }
}
