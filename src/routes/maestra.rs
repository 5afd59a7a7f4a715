//! Maestra chat and export endpoints
//!
//! The chat endpoint runs one full turn: optimistic user append, a reply
//! from the advisor (or the local mock), and the assistant append. A
//! failed advisor call still completes the turn with a canned reply; the
//! user's message stays in the transcript and nothing is retried.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::MaestraMode;
use crate::error::{AppError, Result};
use crate::maestra::{extract_suggestions, mock_reply, ExportOutcome};
use crate::session::{ChatMessage, Suggestion};
use crate::state::AppState;

/// Reply appended when the advisor cannot be reached
const FALLBACK_REPLY: &str =
    "I'm having trouble connecting to Maestra. Please check that the backend is running on port 8825.";

/// Create the Maestra router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chat", post(chat))
        .route("/export", post(export))
}

/// Chat request body
#[derive(Deserialize)]
struct ChatRequest {
    #[serde(rename = "sessionId")]
    session_id: String,
    message: String,
    /// Selected source text, if the user had a selection
    context: Option<String>,
}

/// Chat response body
#[derive(Serialize)]
struct ChatResponse {
    reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestions: Option<Vec<Suggestion>>,
}

/// Run one chat turn against a session
async fn chat(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ChatResponse>> {
    let request: ChatRequest =
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    if request.message.is_empty() {
        return Err(AppError::BadRequest("message must not be empty".to_string()));
    }

    // An empty selection carries no rewrite material; treat it as absent
    let context = request.context.filter(|c| !c.is_empty());

    let session_id = Uuid::parse_str(&request.session_id)
        .map_err(|_| AppError::NotFound(format!("Session not found: {}", request.session_id)))?;
    if state.sessions().get(session_id).await.is_none() {
        return Err(AppError::NotFound(format!(
            "Session not found: {}",
            session_id
        )));
    }

    // Optimistic append; the user's message stays even if the turn fails
    let user_message = ChatMessage::user(&request.message, context.clone());
    state.sessions().add_message(session_id, user_message).await?;

    let (reply, suggestions) = match state.config().maestra.mode {
        MaestraMode::Mock => mock_reply(&request.message, context.as_deref()),
        MaestraMode::Remote => {
            match state
                .maestra()
                .ask(&request.session_id, &request.message, context.as_deref())
                .await
            {
                Ok(answer) => {
                    let suggestions = match context {
                        Some(_) => {
                            let texts = extract_suggestions(&answer);
                            if texts.is_empty() {
                                None
                            } else {
                                Some(texts.into_iter().map(Suggestion::new).collect())
                            }
                        }
                        None => None,
                    };
                    (answer, suggestions)
                }
                Err(e) => {
                    tracing::warn!(session_id = %session_id, "Maestra chat error: {}", e);
                    (FALLBACK_REPLY.to_string(), None)
                }
            }
        }
    };

    let assistant_message = ChatMessage::assistant(&reply, suggestions.clone());
    state
        .sessions()
        .add_message(session_id, assistant_message)
        .await?;

    Ok(Json(ChatResponse { reply, suggestions }))
}

/// Export request body
#[derive(Deserialize)]
struct ExportRequestBody {
    #[serde(rename = "templateData")]
    template_data: serde_json::Value,
    #[serde(rename = "outputFilename")]
    output_filename: String,
    #[serde(rename = "edgeConfig")]
    edge_config: Option<serde_json::Value>,
}

/// Export template data as a Smart PDF
///
/// Always answers 200; failure is reported in the outcome body.
async fn export(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ExportOutcome>> {
    let request: ExportRequestBody =
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let outcome = match state.config().maestra.mode {
        MaestraMode::Mock => {
            ExportOutcome::failed("Smart PDF export requires the Maestra backend")
        }
        MaestraMode::Remote => {
            state
                .maestra()
                .export(
                    request.template_data,
                    &request.output_filename,
                    request.edge_config,
                )
                .await
        }
    };

    Ok(Json(outcome))
}
