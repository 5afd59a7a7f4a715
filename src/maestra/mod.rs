//! Maestra assistant integration
//!
//! The Maestra backend is consumed, never implemented: health probe,
//! manifest extraction, advisor chat, and Smart PDF export. Everything in
//! here degrades rather than fails; the companion stays usable when the
//! backend is down.

pub mod client;
pub mod mock;
pub mod suggestions;
pub mod types;

pub use client::MaestraClient;
pub use mock::mock_reply;
pub use suggestions::{extract_suggestions, MAX_SUGGESTIONS};
pub use types::{ExportOutcome, MaestraError};
