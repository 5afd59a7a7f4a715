//! Smart PDF manifest types
//!
//! A Smart PDF carries structured template metadata: named sections of
//! editable fields, a version history, and permission/security flags.
//! These types mirror the manifest shape exchanged with the Maestra
//! backend and rendered by the companion client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value type of a manifest field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Boolean,
    Array,
    Object,
}

impl FieldType {
    /// Parse a field type from its wire name, defaulting to `Text` for
    /// anything the backend sends that we do not recognize.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "number" => FieldType::Number,
            "date" => FieldType::Date,
            "boolean" => FieldType::Boolean,
            "array" => FieldType::Array,
            "object" => FieldType::Object,
            _ => FieldType::Text,
        }
    }
}

/// A single field within a manifest section
///
/// Fields have no identity of their own; their lifecycle is tied to the
/// owning section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default = "default_editable")]
    pub editable: bool,
}

fn default_editable() -> bool {
    true
}

/// A named group of fields, unique by `id` within a manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestSection {
    pub id: String,
    pub name: String,
    pub fields: Vec<ManifestField>,
}

/// One entry of a manifest's version history
///
/// Entries are immutable once created. Ordering is insertion order, not
/// guaranteed chronological.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestVersion {
    pub id: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

/// What the current user may do with the document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(rename = "canEdit")]
    pub can_edit: bool,
    #[serde(rename = "canShare")]
    pub can_share: bool,
    #[serde(rename = "canExport")]
    pub can_export: bool,
}

/// Security flags carried by the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Security {
    pub encrypted: bool,
    #[serde(rename = "signatureRequired")]
    pub signature_required: bool,
}

/// Structured metadata attached to a Smart PDF
///
/// `version` is conventionally the `version` of the most recent
/// `version_history` entry, but the two are independently settable and
/// the relationship is not enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartPdfManifest {
    #[serde(rename = "templateName")]
    pub template_name: String,
    #[serde(rename = "templateType")]
    pub template_type: String,
    pub version: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub sections: Vec<ManifestSection>,
    #[serde(rename = "versionHistory")]
    pub version_history: Vec<ManifestVersion>,
    pub permissions: Permissions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Security>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_lenient_parse() {
        assert_eq!(FieldType::parse_lenient("number"), FieldType::Number);
        assert_eq!(FieldType::parse_lenient("boolean"), FieldType::Boolean);
        assert_eq!(FieldType::parse_lenient("text"), FieldType::Text);
        assert_eq!(FieldType::parse_lenient("richtext"), FieldType::Text);
    }

    #[test]
    fn test_manifest_serialization_names() {
        let manifest = SmartPdfManifest {
            template_name: "Invoice".to_string(),
            template_type: "Document".to_string(),
            version: "1.0".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            sections: vec![ManifestSection {
                id: "header".to_string(),
                name: "Header".to_string(),
                fields: vec![ManifestField {
                    name: "Title".to_string(),
                    field_type: FieldType::Text,
                    value: Some(serde_json::json!("Invoice")),
                    editable: true,
                }],
            }],
            version_history: vec![],
            permissions: Permissions {
                can_edit: true,
                can_share: true,
                can_export: false,
            },
            security: None,
        };

        let json = serde_json::to_string(&manifest).unwrap();
        assert!(json.contains("templateName"));
        assert!(json.contains("versionHistory"));
        assert!(json.contains("canExport"));
        assert!(!json.contains("security"));
    }

    #[test]
    fn test_field_editable_defaults_true() {
        let field: ManifestField =
            serde_json::from_str(r#"{"name": "Title", "type": "text"}"#).unwrap();
        assert!(field.editable);
        assert!(field.value.is_none());
    }
}
