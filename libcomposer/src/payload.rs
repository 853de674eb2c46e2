//! Wire payload for submitted messages
//!
//! The JSON shape hosts receive from a successful submit:
//!
//! ```json
//! {
//!   "message": "hello",
//!   "files": [
//!     { "name": "a.txt", "size": 5, "type": "text/plain", "content": "aGVsbG8=" }
//!   ]
//! }
//! ```
//!
//! File content is base64 (standard alphabet, padded). The decode path exists
//! for host-side consumers that want the raw bytes back; it re-verifies that
//! the declared size matches the decoded length.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{ComposerError, Result};
use crate::types::{FileInput, Message};

/// A submitted message in wire form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    /// Final message text
    pub message: String,
    /// Attached files, in attach order
    pub files: Vec<FilePayload>,
}

/// A single attached file in wire form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePayload {
    /// Display filename
    pub name: String,
    /// Size of the raw content in bytes
    pub size: u64,
    /// Declared MIME type (may be empty)
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Base64-encoded content
    pub content: String,
}

impl From<&Message> for MessagePayload {
    fn from(message: &Message) -> Self {
        Self {
            message: message.text.clone(),
            files: message
                .attachments
                .iter()
                .map(|a| FilePayload {
                    name: a.name.clone(),
                    size: a.size_bytes,
                    mime_type: a.mime_type.clone(),
                    content: STANDARD.encode(&a.content),
                })
                .collect(),
        }
    }
}

impl MessagePayload {
    /// Serialize to a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ComposerError::Serialization` if JSON encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a payload from a JSON string
    ///
    /// # Errors
    ///
    /// Returns `ComposerError::Serialization` if the JSON is malformed.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Decode the files back into raw inputs
    ///
    /// # Errors
    ///
    /// Returns `ComposerError::Validation` if a file's content is not valid
    /// base64 or its decoded length does not match the declared size.
    pub fn decode_files(&self) -> Result<Vec<FileInput>> {
        self.files
            .iter()
            .map(|f| {
                let content = STANDARD.decode(&f.content).map_err(|e| {
                    ComposerError::Validation(format!("'{}' has invalid base64 content: {}", f.name, e))
                })?;

                if content.len() as u64 != f.size {
                    return Err(ComposerError::Validation(format!(
                        "'{}' declares {} bytes but decoded content is {} bytes",
                        f.name,
                        f.size,
                        content.len()
                    )));
                }

                Ok(FileInput {
                    name: f.name.clone(),
                    mime_type: f.mime_type.clone(),
                    size_bytes: f.size,
                    content,
                })
            })
            .collect()
    }
}
