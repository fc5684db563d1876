//! # Roster Backend
//!
//! The record store service for the teacher roster.
//!
//! ## Architecture
//!
//! ```text
//! Browser (Yew frontend)
//!     ↓
//! IO Layer (REST handlers, error translation)
//!     ↓
//! Domain Layer (TeacherService, validation)
//!     ↓
//! Storage Layer (TeacherStorage, SQLite)
//! ```
//!
//! The server also serves the built frontend and accepts log lines from it.

pub mod domain;
pub mod io;
pub mod settings;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    routing::post,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::domain::TeacherService;
use crate::settings::{FrontendSettings, Settings};
use crate::storage::{DbConnection, TeacherRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub teacher_service: TeacherService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(settings: &Settings) -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::new(&settings.database.url).await?;

    info!("Setting up domain model");
    let teacher_service = TeacherService::new(Arc::new(TeacherRepository::new(db_conn)));

    Ok(AppState { teacher_service })
}

fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if allowed_origin == "*" {
        return Ok(cors.allow_origin(Any));
    }

    let origin = allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", allowed_origin))?;
    Ok(cors.allow_origin(origin))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, frontend: &FrontendSettings) -> Result<Router> {
    let cors = cors_layer(&frontend.allowed_origin)?;

    Ok(io::rest::teacher_apis::router()
        .route("/logs", post(io::rest::log_message))
        .fallback_service(ServeDir::new(&frontend.static_dir))
        .layer(cors)
        .with_state(app_state))
}
