//! Smart PDF manifest model
//!
//! Detection decides whether an imported file is a Smart PDF at all;
//! the manifest itself either comes from the Maestra backend or is
//! synthesized locally from the file name.

pub mod detect;
pub mod mock;
pub mod types;

pub use detect::{is_smart_pdf, template_name};
pub use mock::mock_manifest;
pub use types::{
    FieldType, ManifestField, ManifestSection, ManifestVersion, Permissions, Security,
    SmartPdfManifest,
};
