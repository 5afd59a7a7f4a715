//! PDF session and chat transcript types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::manifest::SmartPdfManifest;
use crate::session::viewport::ZOOM_DEFAULT;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A candidate rewrite of selected text, offered by the assistant
///
/// Mutated in place when the user accepts it; there is no undo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub applied: bool,
}

impl Suggestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: format!("sug-{}", Uuid::new_v4()),
            text: text.into(),
            applied: false,
        }
    }
}

/// One entry of a session's chat transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Source text the user had selected when sending, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<Suggestion>>,
}

impl ChatMessage {
    /// Build a user message, carrying the selected-text context if any
    pub fn user(content: impl Into<String>, context: Option<String>) -> Self {
        Self {
            id: format!("msg-{}", Uuid::new_v4()),
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            context,
            suggestions: None,
        }
    }

    /// Build an assistant message with optional rewrite suggestions
    pub fn assistant(content: impl Into<String>, suggestions: Option<Vec<Suggestion>>) -> Self {
        Self {
            id: format!("msg-{}", Uuid::new_v4()),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            context: None,
            suggestions,
        }
    }
}

/// Server-side record of one opened document's viewing and chat state
///
/// Owned exclusively by the [`SessionStore`](crate::session::SessionStore);
/// clients hold transient copies and mutate through the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfSession {
    pub id: Uuid,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "isSmartPdf")]
    pub is_smart_pdf: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<SmartPdfManifest>,
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
    pub zoom: u32,
    #[serde(rename = "selectedText", skip_serializing_if = "Option::is_none")]
    pub selected_text: Option<String>,
    pub messages: Vec<ChatMessage>,
}

impl PdfSession {
    /// Create a fresh session with default viewing state
    pub fn new(file_name: &str, is_smart_pdf: bool, manifest: Option<SmartPdfManifest>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            is_smart_pdf,
            manifest,
            current_page: 1,
            total_pages: 0,
            zoom: ZOOM_DEFAULT,
            selected_text: None,
            messages: Vec::new(),
        }
    }
}

/// Partial update to a session
///
/// Fields left `None` are untouched by [`SessionStore::update`]. The
/// session id is deliberately absent; it is never patchable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionPatch {
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(rename = "isSmartPdf")]
    pub is_smart_pdf: Option<bool>,
    pub manifest: Option<SmartPdfManifest>,
    #[serde(rename = "currentPage")]
    pub current_page: Option<u32>,
    #[serde(rename = "totalPages")]
    pub total_pages: Option<u32>,
    pub zoom: Option<u32>,
    #[serde(rename = "selectedText")]
    pub selected_text: Option<String>,
    pub messages: Option<Vec<ChatMessage>>,
}
