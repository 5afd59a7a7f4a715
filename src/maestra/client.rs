//! Maestra Backend Client
//!
//! Talks to the Maestra backend over HTTP. Every call is best-effort with
//! no retry; callers that can degrade (manifest extraction, export) get a
//! fallback value instead of an error, and only the advisor surfaces
//! failures so the chat turn can append its fallback reply.

use chrono::Utc;

use crate::manifest::{
    FieldType, ManifestField, ManifestSection, ManifestVersion, Permissions, Security,
    SmartPdfManifest,
};

use super::types::{
    version_string, AdvisorRequest, AdvisorResponse, ExportOutcome, ExportRequest, ExportResponse,
    ImportRequest, ImportResponse, MaestraError, TemplateData,
};

/// The user id this companion identifies itself as to the advisor
const ADVISOR_USER_ID: &str = "smart-pdf-companion";

/// HTTP client for the Maestra backend
#[derive(Clone)]
pub struct MaestraClient {
    base_url: String,
    http: reqwest::Client,
}

impl MaestraClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Check whether the backend is reachable
    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Maestra health check failed: {}", e);
                false
            }
        }
    }

    /// Extract a manifest for a Smart PDF from the backend
    ///
    /// Returns `None` on any failure; the session then stays classified
    /// as smart but carries no manifest.
    pub async fn import_manifest(&self, pdf_reference: &str) -> Option<SmartPdfManifest> {
        let url = format!("{}/api/maestra/smart-pdf/import", self.base_url);
        let request = ImportRequest {
            pdf_url: pdf_reference.to_string(),
            validate_schema: true,
            create_library_entry: false,
        };

        let response = match self.http.post(&url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Manifest extraction error: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Manifest extraction failed: {}", response.status());
            return None;
        }

        match response.json::<ImportResponse>().await {
            Ok(data) => Some(manifest_from_template(data.template_data)),
            Err(e) => {
                tracing::warn!("Manifest extraction returned an unreadable body: {}", e);
                None
            }
        }
    }

    /// Ask the advisor a question, with selected text folded into the prompt
    pub async fn ask(
        &self,
        session_id: &str,
        message: &str,
        context: Option<&str>,
    ) -> Result<String, MaestraError> {
        let url = format!("{}/api/maestra/advisor/ask", self.base_url);

        let question = match context {
            Some(context) => format!("{}\n\nContext: {}", message, context),
            None => message.to_string(),
        };
        let context_hints = if context.is_some() {
            vec!["smart_pdf".to_string(), "document_editing".to_string()]
        } else {
            Vec::new()
        };

        let request = AdvisorRequest {
            session_id: session_id.to_string(),
            user_id: ADVISOR_USER_ID.to_string(),
            question,
            mode: "quick".to_string(),
            context_hints,
        };

        let response = self.http.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(MaestraError::Status(response.status()));
        }

        let data = response.json::<AdvisorResponse>().await?;
        Ok(data.answer)
    }

    /// Export template data as a Smart PDF through the backend
    ///
    /// Failures are folded into the outcome rather than returned as errors.
    pub async fn export(
        &self,
        template_data: serde_json::Value,
        output_filename: &str,
        edge_config: Option<serde_json::Value>,
    ) -> ExportOutcome {
        let url = format!("{}/api/maestra/smart-pdf/export", self.base_url);
        let request = ExportRequest {
            template_data,
            output_filename: output_filename.to_string(),
            edge_config,
            create_library_entry: true,
        };

        let response = match self.http.post(&url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Smart PDF export error: {}", e);
                return ExportOutcome::failed(e.to_string());
            }
        };

        if !response.status().is_success() {
            return ExportOutcome::failed(format!("Export failed: {}", response.status()));
        }

        match response.json::<ExportResponse>().await {
            Ok(data) => ExportOutcome::ok(data.download_url),
            Err(e) => ExportOutcome::failed(format!("Export returned an unreadable body: {}", e)),
        }
    }
}

/// Map Maestra template data into the manifest shape
///
/// Inputs are regrouped under the section they reference; permissions
/// default to granted when the backend leaves them out.
fn manifest_from_template(template: TemplateData) -> SmartPdfManifest {
    let now = Utc::now();

    let sections = template
        .sections
        .iter()
        .map(|section| ManifestSection {
            id: section.section_id.clone(),
            name: section.title.clone(),
            fields: template
                .inputs
                .iter()
                .filter(|input| input.section == section.section_id)
                .map(|input| ManifestField {
                    name: input.field_id.clone(),
                    field_type: FieldType::parse_lenient(&input.field_type),
                    value: Some(
                        input
                            .default_value
                            .clone()
                            .unwrap_or_else(|| serde_json::json!("")),
                    ),
                    editable: true,
                })
                .collect(),
        })
        .collect();

    let version_history = template
        .history
        .iter()
        .map(|entry| {
            let version = version_string(&entry.version);
            ManifestVersion {
                id: format!("v{}", version),
                version,
                timestamp: entry.timestamp,
                author: entry.author.clone(),
                changes: entry.changes.clone(),
            }
        })
        .collect();

    let permissions = template.permissions.as_ref();

    SmartPdfManifest {
        template_name: template.name,
        template_type: template.template_type,
        version: version_string(&template.version),
        created_at: template.created_at.unwrap_or(now),
        updated_at: template.updated_at.unwrap_or(now),
        sections,
        version_history,
        permissions: Permissions {
            can_edit: permissions.and_then(|p| p.edit).unwrap_or(true),
            can_share: permissions.and_then(|p| p.share).unwrap_or(true),
            can_export: permissions.and_then(|p| p.export).unwrap_or(true),
        },
        security: Some(Security {
            encrypted: false,
            signature_required: permissions
                .and_then(|p| p.signature_required)
                .unwrap_or(false),
        }),
    }
}
