//! The composer core
//!
//! Owns the draft (text plus staged attachments) and exposes the operations a
//! host wires to its input events: replace text, attach/detach files, submit,
//! reset. The composer pushes no notifications; hosts inspect return values
//! and re-render however they like.
//!
//! All operations take `&mut self` and neither block nor suspend. The core is
//! built for a single-writer event loop; reentrant hosts must serialize their
//! calls themselves.

use tracing::{debug, trace};

use crate::config::ComposerConfig;
use crate::error::{ComposerError, Result};
use crate::types::{Attachment, Draft, FileInput, Message};
use crate::validation;

/// Attachment-aware input composer
///
/// # Example
///
/// ```
/// use libcomposer::{Composer, FileInput};
///
/// # fn example() -> libcomposer::Result<()> {
/// let mut composer = Composer::new();
/// composer.set_text("hello");
/// composer.attach(FileInput::new("a.txt", "text/plain", b"notes".to_vec()))?;
///
/// let message = composer.submit()?;
/// assert_eq!(message.text, "hello");
/// assert!(composer.draft().is_empty());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct Composer {
    draft: Draft,
    config: ComposerConfig,
}

impl Composer {
    /// Create a composer with default configuration (env-derived limits)
    pub fn new() -> Self {
        Self::with_config(ComposerConfig::default())
    }

    /// Create a composer with explicit limits
    pub fn with_config(config: ComposerConfig) -> Self {
        Self {
            draft: Draft::default(),
            config,
        }
    }

    /// The current draft
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The current draft text
    pub fn text(&self) -> &str {
        &self.draft.text
    }

    /// Staged attachments in attach order
    pub fn attachments(&self) -> &[Attachment] {
        &self.draft.attachments
    }

    /// True when a submit would succeed
    pub fn is_submittable(&self) -> bool {
        self.draft.is_submittable()
    }

    /// Replace the draft text
    ///
    /// No constraints; the empty string is allowed. No other state changes.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.draft.text = text.into();
        trace!(chars = self.draft.text.chars().count(), "draft text replaced");
    }

    /// Stage a file as an attachment, returning its assigned id
    ///
    /// # Errors
    ///
    /// Returns `ComposerError::Validation` if the declared size does not match
    /// the content length or a configured limit is exceeded. The draft is
    /// unchanged on failure.
    pub fn attach(&mut self, file: FileInput) -> Result<String> {
        validation::validate_batch(
            std::slice::from_ref(&file),
            self.draft.attachments.len(),
            &self.config,
        )?;

        let attachment = Attachment::from_file(file);
        let id = attachment.id.clone();
        debug!(%id, name = %attachment.name, size = attachment.size_bytes, "attachment staged");
        self.draft.attachments.push(attachment);
        Ok(id)
    }

    /// Stage several files at once, returning their ids in order
    ///
    /// The whole batch is validated up front: either every file is staged or
    /// none is.
    ///
    /// # Errors
    ///
    /// Returns `ComposerError::Validation` on the first failing file or limit
    /// check. The draft is unchanged on failure.
    pub fn attach_many(&mut self, files: Vec<FileInput>) -> Result<Vec<String>> {
        validation::validate_batch(&files, self.draft.attachments.len(), &self.config)?;

        let mut ids = Vec::with_capacity(files.len());
        for file in files {
            let attachment = Attachment::from_file(file);
            ids.push(attachment.id.clone());
            self.draft.attachments.push(attachment);
        }
        debug!(count = ids.len(), "attachments staged");
        Ok(ids)
    }

    /// Remove a staged attachment by id, returning it
    ///
    /// # Errors
    ///
    /// Returns `ComposerError::NotFound` if no attachment has the id. The
    /// draft is unchanged on failure.
    pub fn detach(&mut self, id: &str) -> Result<Attachment> {
        let pos = self
            .draft
            .attachments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| ComposerError::NotFound(id.to_string()))?;

        let removed = self.draft.attachments.remove(pos);
        debug!(%id, name = %removed.name, "attachment removed");
        Ok(removed)
    }

    /// Finalize the draft into a message and clear the draft
    ///
    /// The draft is moved out and replaced with an empty one in a single step,
    /// so no caller can ever observe a captured-but-not-cleared draft. This is
    /// the only operation that produces an external artifact.
    ///
    /// # Errors
    ///
    /// Returns `ComposerError::EmptySubmission` if the draft has no text and
    /// no attachments; the draft is unchanged in that case.
    pub fn submit(&mut self) -> Result<Message> {
        if !self.draft.is_submittable() {
            return Err(ComposerError::EmptySubmission);
        }

        let draft = std::mem::take(&mut self.draft);
        let message = Message::from_draft(draft);
        debug!(
            id = %message.id,
            chars = message.text.chars().count(),
            attachments = message.attachments.len(),
            "message submitted"
        );
        Ok(message)
    }

    /// Unconditionally clear the draft
    pub fn reset(&mut self) {
        self.draft = Draft::default();
        trace!("draft cleared");
    }
}
