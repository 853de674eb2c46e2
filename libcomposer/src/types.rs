//! Core types for the composer

use uuid::Uuid;

/// A file as delivered by the host's file-acquisition mechanism
///
/// This is the input to [`Composer::attach`](crate::Composer::attach). The
/// composer verifies that `size_bytes` matches the actual content length
/// before staging it as an [`Attachment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInput {
    /// Display filename
    pub name: String,
    /// Declared MIME type (may be empty when unknown)
    pub mime_type: String,
    /// Declared size in bytes
    pub size_bytes: u64,
    /// Raw file content
    pub content: Vec<u8>,
}

impl FileInput {
    /// Create a file input with `size_bytes` derived from the content
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes: content.len() as u64,
            content,
        }
    }
}

/// A staged file attachment, not yet part of a submitted message
///
/// Created by the composer when a [`FileInput`] passes validation. The id is
/// a UUID v4, unique within the composer session, and the content buffer is
/// exclusively owned by the draft until it transfers to a [`Message`] at
/// submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Unique identifier, assigned on staging (UUID v4)
    pub id: String,
    /// Display filename
    pub name: String,
    /// Declared MIME type (may be empty when unknown)
    pub mime_type: String,
    /// Size in bytes, equals `content.len()`
    pub size_bytes: u64,
    /// Raw file content
    pub content: Vec<u8>,
    /// When the file was staged (Unix timestamp)
    pub attached_at: i64,
}

impl Attachment {
    /// Stage a validated file input with a fresh id and timestamp
    pub(crate) fn from_file(file: FileInput) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: file.name,
            mime_type: file.mime_type,
            size_bytes: file.size_bytes,
            content: file.content,
            attached_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// The in-progress, unsent composition
///
/// Attachments keep insertion order. A draft with empty text and no
/// attachments is never submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Current unsent text (may be empty)
    pub text: String,
    /// Staged attachments in attach order
    pub attachments: Vec<Attachment>,
}

impl Draft {
    /// True when there is neither text nor any attachment
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.attachments.is_empty()
    }

    /// True when the draft can be submitted (text OR attachments present)
    pub fn is_submittable(&self) -> bool {
        !self.is_empty()
    }
}

/// The immutable result of a successful submission
///
/// Owns the draft's attachment buffers after the transfer at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Unique message identifier (UUID v4)
    pub id: String,
    /// Final text at submit time
    pub text: String,
    /// Attachments in attach order, ownership transferred from the draft
    pub attachments: Vec<Attachment>,
    /// When the message was submitted (Unix timestamp)
    pub submitted_at: i64,
}

impl Message {
    /// Capture a draft into a finalized message
    pub(crate) fn from_draft(draft: Draft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: draft.text,
            attachments: draft.attachments,
            submitted_at: chrono::Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_input_new_derives_size() {
        let file = FileInput::new("a.txt", "text/plain", b"hello".to_vec());

        assert_eq!(file.name, "a.txt");
        assert_eq!(file.mime_type, "text/plain");
        assert_eq!(file.size_bytes, 5);
        assert_eq!(file.content, b"hello");
    }

    #[test]
    fn test_file_input_new_empty_content() {
        let file = FileInput::new("empty.bin", "", Vec::new());

        assert_eq!(file.size_bytes, 0);
        assert!(file.content.is_empty());
        assert!(file.mime_type.is_empty());
    }

    #[test]
    fn test_attachment_from_file_uuid_generation() {
        let file = FileInput::new("a.txt", "text/plain", b"hello".to_vec());
        let attachment = Attachment::from_file(file);

        let uuid_result = Uuid::parse_str(&attachment.id);
        assert!(uuid_result.is_ok(), "Attachment ID should be a valid UUID");
        assert_eq!(uuid_result.unwrap().get_version(), Some(uuid::Version::Random));
    }

    #[test]
    fn test_attachment_from_file_unique_ids() {
        let a = Attachment::from_file(FileInput::new("a.txt", "text/plain", b"a".to_vec()));
        let b = Attachment::from_file(FileInput::new("a.txt", "text/plain", b"a".to_vec()));

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_attachment_from_file_preserves_metadata() {
        let file = FileInput::new("photo.png", "image/png", vec![0u8; 16]);
        let attachment = Attachment::from_file(file);

        assert_eq!(attachment.name, "photo.png");
        assert_eq!(attachment.mime_type, "image/png");
        assert_eq!(attachment.size_bytes, 16);
        assert_eq!(attachment.content.len(), 16);
        assert!(attachment.attached_at > 1_600_000_000);
    }

    #[test]
    fn test_draft_default_is_empty() {
        let draft = Draft::default();

        assert!(draft.is_empty());
        assert!(!draft.is_submittable());
        assert_eq!(draft.text, "");
        assert!(draft.attachments.is_empty());
    }

    #[test]
    fn test_draft_with_text_is_submittable() {
        let draft = Draft {
            text: "hello".to_string(),
            attachments: Vec::new(),
        };

        assert!(!draft.is_empty());
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_draft_with_only_attachment_is_submittable() {
        let attachment =
            Attachment::from_file(FileInput::new("a.txt", "text/plain", b"a".to_vec()));
        let draft = Draft {
            text: String::new(),
            attachments: vec![attachment],
        };

        assert!(draft.is_submittable());
    }

    #[test]
    fn test_message_from_draft_captures_state() {
        let attachment =
            Attachment::from_file(FileInput::new("a.txt", "text/plain", b"hello".to_vec()));
        let attachment_id = attachment.id.clone();
        let draft = Draft {
            text: "hello".to_string(),
            attachments: vec![attachment],
        };

        let message = Message::from_draft(draft);

        assert_eq!(message.text, "hello");
        assert_eq!(message.attachments.len(), 1);
        assert_eq!(message.attachments[0].id, attachment_id);
        assert!(Uuid::parse_str(&message.id).is_ok());
        assert!(message.submitted_at > 1_600_000_000);
    }
}
