//! libcomposer - attachment-aware message composer
//!
//! A host-agnostic input composer: it manages the draft of a chat message
//! (text plus staged file attachments), validates input, and produces exactly
//! one finalized [`Message`] per successful submit. The host owns rendering,
//! the event loop, and file acquisition; this crate owns the state.

pub mod composer;
pub mod config;
pub mod error;
pub mod logging;
pub mod payload;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use composer::Composer;
pub use config::ComposerConfig;
pub use error::{ComposerError, Result};
pub use payload::{FilePayload, MessagePayload};
pub use types::{Attachment, Draft, FileInput, Message};
