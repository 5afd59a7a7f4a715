//! PDF session model and store
//!
//! A session records the viewing and chat state of one opened document.
//! Sessions are created on import, mutated by viewport patches and message
//! appends, and only destroyed explicitly or when the process exits.

pub mod store;
pub mod types;
pub mod viewport;

pub use store::{SessionStore, StoreError};
pub use types::{ChatMessage, PdfSession, Role, SessionPatch, Suggestion};
