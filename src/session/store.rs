//! PDF Session Store
//!
//! In-memory session storage with RwLock protection. Sessions live for the
//! lifetime of the process; there is no persistence, and concurrent updates
//! to the same session resolve as last-write-wins.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::manifest::SmartPdfManifest;
use crate::session::types::{ChatMessage, PdfSession, SessionPatch};
use crate::session::viewport::{clamp_page, clamp_zoom};

/// Errors from session store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Suggestion not found: {0}")]
    SuggestionNotFound(String),
}

/// Owns every [`PdfSession`]; handlers clone sessions out and mutate
/// through the operations here
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

struct SessionStoreInner {
    /// Active sessions indexed by ID
    sessions: RwLock<HashMap<Uuid, PdfSession>>,
}

impl SessionStore {
    /// Create an empty session store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                sessions: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Create and store a new session
    pub async fn create(
        &self,
        file_name: &str,
        is_smart_pdf: bool,
        manifest: Option<SmartPdfManifest>,
    ) -> PdfSession {
        let session = PdfSession::new(file_name, is_smart_pdf, manifest);
        let id = session.id;

        {
            let mut sessions = self.inner.sessions.write().await;
            sessions.insert(id, session.clone());
        }

        tracing::info!(
            session_id = %id,
            file_name = %file_name,
            is_smart_pdf,
            "Created PDF session"
        );

        session
    }

    /// Get a session by ID
    pub async fn get(&self, id: Uuid) -> Option<PdfSession> {
        let sessions = self.inner.sessions.read().await;
        sessions.get(&id).cloned()
    }

    /// Shallow-merge a patch into a stored session
    ///
    /// Fields left `None` in the patch are untouched. Zoom and page values
    /// are normalized after the merge so the stored session stays within
    /// its valid range.
    pub async fn update(&self, id: Uuid, patch: SessionPatch) -> Result<PdfSession, StoreError> {
        let mut sessions = self.inner.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| StoreError::SessionNotFound(id.to_string()))?;

        if let Some(file_name) = patch.file_name {
            session.file_name = file_name;
        }
        if let Some(is_smart_pdf) = patch.is_smart_pdf {
            session.is_smart_pdf = is_smart_pdf;
        }
        if let Some(manifest) = patch.manifest {
            session.manifest = Some(manifest);
        }
        if let Some(total_pages) = patch.total_pages {
            session.total_pages = total_pages;
        }
        if let Some(current_page) = patch.current_page {
            session.current_page = current_page;
        }
        if let Some(zoom) = patch.zoom {
            session.zoom = zoom;
        }
        if let Some(selected_text) = patch.selected_text {
            session.selected_text = Some(selected_text);
        }
        if let Some(messages) = patch.messages {
            session.messages = messages;
        }

        session.zoom = clamp_zoom(session.zoom);
        session.current_page = clamp_page(session.current_page, session.total_pages);

        Ok(session.clone())
    }

    /// Append a message to a session's transcript
    ///
    /// Messages are kept in arrival order; there is no dedup and no cap.
    pub async fn add_message(
        &self,
        id: Uuid,
        message: ChatMessage,
    ) -> Result<PdfSession, StoreError> {
        let mut sessions = self.inner.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| StoreError::SessionNotFound(id.to_string()))?;

        session.messages.push(message);
        Ok(session.clone())
    }

    /// Mark a suggestion as applied
    ///
    /// The suggestion is looked up by ID across the whole transcript.
    /// Idempotent: re-applying an already-applied suggestion leaves the
    /// flag set.
    pub async fn apply_suggestion(
        &self,
        session_id: Uuid,
        suggestion_id: &str,
    ) -> Result<PdfSession, StoreError> {
        let mut sessions = self.inner.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| StoreError::SessionNotFound(session_id.to_string()))?;

        let suggestion = session
            .messages
            .iter_mut()
            .filter_map(|m| m.suggestions.as_mut())
            .flatten()
            .find(|s| s.id == suggestion_id)
            .ok_or_else(|| StoreError::SuggestionNotFound(suggestion_id.to_string()))?;

        suggestion.applied = true;
        Ok(session.clone())
    }

    /// Remove a session, returning whether it was present
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut sessions = self.inner.sessions.write().await;
        sessions.remove(&id).is_some()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
