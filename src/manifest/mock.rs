//! Local manifest synthesis
//!
//! When the Maestra backend is not in play, Smart PDF sessions still get a
//! populated manifest so the client panels have something to render. The
//! synthesized manifest is derived from the file name alone.

use chrono::{Duration, Utc};

use super::detect::template_name;
use super::types::{
    FieldType, ManifestField, ManifestSection, ManifestVersion, Permissions, Security,
    SmartPdfManifest,
};

/// Synthesize a manifest for a Smart PDF from its file name
pub fn mock_manifest(file_name: &str) -> SmartPdfManifest {
    let now = Utc::now();
    let name = template_name(file_name);

    let versions = vec![
        ManifestVersion {
            id: "v3".to_string(),
            version: "3.0".to_string(),
            timestamp: now,
            author: Some("Current User".to_string()),
            changes: Some("Latest revision".to_string()),
        },
        ManifestVersion {
            id: "v2".to_string(),
            version: "2.0".to_string(),
            timestamp: now - Duration::days(2),
            author: Some("Editor".to_string()),
            changes: Some("Formatting".to_string()),
        },
        ManifestVersion {
            id: "v1".to_string(),
            version: "1.0".to_string(),
            timestamp: now - Duration::days(7),
            author: Some("Creator".to_string()),
            changes: Some("Initial".to_string()),
        },
    ];

    SmartPdfManifest {
        template_name: name.clone(),
        template_type: "Document".to_string(),
        version: "3.0".to_string(),
        created_at: versions[2].timestamp,
        updated_at: now,
        sections: vec![
            ManifestSection {
                id: "header".to_string(),
                name: "Header Section".to_string(),
                fields: vec![
                    ManifestField {
                        name: "Title".to_string(),
                        field_type: FieldType::Text,
                        value: Some(serde_json::json!(name)),
                        editable: true,
                    },
                    ManifestField {
                        name: "Author".to_string(),
                        field_type: FieldType::Text,
                        value: Some(serde_json::json!("Author")),
                        editable: true,
                    },
                ],
            },
            ManifestSection {
                id: "content".to_string(),
                name: "Content".to_string(),
                fields: vec![ManifestField {
                    name: "Body".to_string(),
                    field_type: FieldType::Text,
                    value: Some(serde_json::json!("Content...")),
                    editable: true,
                }],
            },
        ],
        version_history: versions,
        permissions: Permissions {
            can_edit: true,
            can_share: true,
            can_export: true,
        },
        security: Some(Security {
            encrypted: false,
            signature_required: false,
        }),
    }
}
