//! Health endpoint

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::MaestraMode;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Reachability of the Maestra backend; always connected in mock mode
    pub maestra: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Report server health and Maestra connectivity
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = match state.config().maestra.mode {
        MaestraMode::Mock => true,
        MaestraMode::Remote => state.maestra().health().await,
    };

    Json(HealthResponse {
        status: "healthy",
        maestra: if connected { "connected" } else { "disconnected" },
        timestamp: Utc::now(),
    })
}
