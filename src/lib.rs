//! Smart PDF Companion Server
//!
//! Server side of the Smart PDF Companion: PDF session management, Smart
//! PDF manifest handling, and an AI chat sidebar backed by the Maestra
//! backend. The main server binary is in main.rs.
//!
//! # Modules
//!
//! - `manifest`: Smart PDF detection and manifest model
//! - `session`: session/chat data model and the in-memory store
//! - `maestra`: client for the Maestra backend, plus the mock chat path
//! - `routes`: HTTP JSON API

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod maestra;
pub mod manifest;
pub mod routes;
pub mod session;
pub mod state;

use state::AppState;

/// Build the application router with all API routes and middleware
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .nest("/api/pdf", routes::pdf::router())
        .nest("/api/maestra", routes::maestra::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
