//! Maestra wire types
//!
//! Request/response bodies exchanged with the Maestra backend. The backend
//! evolves independently, so response types default any field we can live
//! without and ignore anything unknown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors from the Maestra client
#[derive(Debug, thiserror::Error)]
pub enum MaestraError {
    #[error("Maestra request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Maestra returned status {0}")]
    Status(reqwest::StatusCode),
}

// ============================================================================
// Advisor
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AdvisorRequest {
    pub session_id: String,
    pub user_id: String,
    pub question: String,
    pub mode: String,
    pub context_hints: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdvisorResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<AdvisorSource>,
}

/// A source the advisor consulted for its answer
#[derive(Debug, Deserialize)]
pub struct AdvisorSource {
    pub title: String,
    #[serde(rename = "type")]
    pub source_type: String,
    pub confidence: f64,
    #[serde(default)]
    pub excerpt: Option<String>,
}

// ============================================================================
// Smart PDF import
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ImportRequest {
    pub pdf_url: String,
    pub validate_schema: bool,
    pub create_library_entry: bool,
}

#[derive(Debug, Deserialize)]
pub struct ImportResponse {
    #[serde(default)]
    pub success: bool,
    pub template_data: TemplateData,
}

/// Maestra's structured template representation
///
/// Fields live in a flat `inputs` list and reference their section by id;
/// the mapping into a manifest regroups them under their sections.
#[derive(Debug, Deserialize)]
pub struct TemplateData {
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: String,
    pub version: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sections: Vec<TemplateSection>,
    #[serde(default)]
    pub inputs: Vec<TemplateInput>,
    #[serde(default)]
    pub history: Vec<TemplateHistoryEntry>,
    #[serde(default)]
    pub permissions: Option<TemplatePermissions>,
}

#[derive(Debug, Deserialize)]
pub struct TemplateSection {
    pub section_id: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct TemplateInput {
    pub field_id: String,
    pub section: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub default_value: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct TemplateHistoryEntry {
    pub version: serde_json::Value,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub changes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TemplatePermissions {
    #[serde(default)]
    pub edit: Option<bool>,
    #[serde(default)]
    pub share: Option<bool>,
    #[serde(default)]
    pub export: Option<bool>,
    #[serde(default)]
    pub signature_required: Option<bool>,
}

// ============================================================================
// Smart PDF export
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ExportRequest {
    pub template_data: serde_json::Value,
    pub output_filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_config: Option<serde_json::Value>,
    pub create_library_entry: bool,
}

#[derive(Debug, Deserialize)]
pub struct ExportResponse {
    #[serde(default)]
    pub success: bool,
    pub download_url: String,
}

/// What an export attempt came to, reported to our own caller
///
/// Export failures are carried in-band; the endpoint itself always
/// answers 200.
#[derive(Debug, Serialize)]
pub struct ExportOutcome {
    pub success: bool,
    #[serde(rename = "downloadUrl", skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportOutcome {
    pub fn ok(download_url: String) -> Self {
        Self {
            success: true,
            download_url: Some(download_url),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            download_url: None,
            error: Some(error.into()),
        }
    }
}

/// Render a version value as a string, whatever JSON type it arrived as
pub fn version_string(version: &serde_json::Value) -> String {
    match version.as_str() {
        Some(s) => s.to_string(),
        None => version.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_handles_both_shapes() {
        assert_eq!(version_string(&serde_json::json!("3.0")), "3.0");
        assert_eq!(version_string(&serde_json::json!(3)), "3");
    }

    #[test]
    fn test_export_outcome_wire_shape() {
        let ok = serde_json::to_value(ExportOutcome::ok("http://x/file.pdf".into())).unwrap();
        assert_eq!(ok["success"], true);
        assert_eq!(ok["downloadUrl"], "http://x/file.pdf");
        assert!(ok.get("error").is_none());

        let failed = serde_json::to_value(ExportOutcome::failed("backend down")).unwrap();
        assert_eq!(failed["success"], false);
        assert!(failed.get("downloadUrl").is_none());
    }

    #[test]
    fn test_template_data_tolerates_sparse_responses() {
        let data: TemplateData = serde_json::from_str(
            r#"{"name": "Invoice", "type": "Document", "version": 2}"#,
        )
        .unwrap();
        assert_eq!(data.name, "Invoice");
        assert!(data.sections.is_empty());
        assert!(data.permissions.is_none());
    }
}
