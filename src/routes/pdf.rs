//! PDF session API endpoints
//!
//! Import creates a session; the rest of the endpoints read and mutate it.
//! Uploaded file content is validated and then dropped: rendering happens
//! client-side, and the server only keeps session state.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use base64::Engine;
use serde::Deserialize;
use uuid::Uuid;

use crate::config::MaestraMode;
use crate::error::{AppError, Result};
use crate::manifest::{is_smart_pdf, mock_manifest};
use crate::session::{PdfSession, SessionPatch};
use crate::state::AppState;

/// Create the PDF session router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/import", post(import_pdf))
        .route("/session/:id", get(get_session))
        .route("/session/:id", patch(update_session))
        .route("/session/:id", delete(delete_session))
        .route(
            "/session/:id/suggestions/:suggestion_id/apply",
            post(apply_suggestion),
        )
}

/// Import request body
#[derive(Deserialize)]
struct ImportPdfRequest {
    #[serde(rename = "fileName")]
    file_name: String,
    /// Base64-encoded file content
    #[serde(rename = "fileData")]
    file_data: String,
}

/// Import a PDF and create its session
async fn import_pdf(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<PdfSession>> {
    let request: ImportPdfRequest =
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    if request.file_name.is_empty() {
        return Err(AppError::BadRequest("fileName must not be empty".to_string()));
    }

    let file_data = base64::engine::general_purpose::STANDARD
        .decode(request.file_data.as_bytes())
        .map_err(|e| AppError::BadRequest(format!("fileData is not valid base64: {}", e)))?;
    tracing::debug!(
        file_name = %request.file_name,
        bytes = file_data.len(),
        "Received PDF import"
    );

    let is_smart = is_smart_pdf(&request.file_name);
    let manifest = if is_smart {
        match state.config().maestra.mode {
            MaestraMode::Mock => Some(mock_manifest(&request.file_name)),
            MaestraMode::Remote => state.maestra().import_manifest(&request.file_name).await,
        }
    } else {
        None
    };

    let session = state
        .sessions()
        .create(&request.file_name, is_smart, manifest)
        .await;
    Ok(Json(session))
}

/// Get a session
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PdfSession>> {
    let id = parse_session_id(&id)?;
    let session = state
        .sessions()
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session not found: {}", id)))?;
    Ok(Json(session))
}

/// Patch a session's mutable fields
async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<PdfSession>> {
    let id = parse_session_id(&id)?;
    let patch: SessionPatch =
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let session = state.sessions().update(id, patch).await?;
    Ok(Json(session))
}

/// Delete a session
async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_session_id(&id)?;
    if state.sessions().delete(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session not found: {}", id)))
    }
}

/// Mark a suggestion as applied
async fn apply_suggestion(
    State(state): State<AppState>,
    Path((id, suggestion_id)): Path<(String, String)>,
) -> Result<Json<PdfSession>> {
    let id = parse_session_id(&id)?;
    let session = state.sessions().apply_suggestion(id, &suggestion_id).await?;
    Ok(Json(session))
}

/// Parse a session id from the path
///
/// An unparseable id can never name a stored session, so it reports as
/// not-found rather than bad-request.
fn parse_session_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound(format!("Session not found: {}", id)))
}
