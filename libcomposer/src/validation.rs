//! Attachment validation
//!
//! Checks file inputs against the structural invariant (declared size must
//! equal actual content length) and the configured limits before anything is
//! staged. Validation never mutates the draft; a failed check leaves the
//! composer exactly as it was.

use crate::config::ComposerConfig;
use crate::error::{ComposerError, Result};
use crate::types::FileInput;

/// Validate a single file input against the invariant and size limit
///
/// # Errors
///
/// Returns `ComposerError::Validation` if `size_bytes` does not match the
/// content length, or if the content exceeds `max_attachment_bytes`.
pub fn validate_file(file: &FileInput, config: &ComposerConfig) -> Result<()> {
    let actual = file.content.len() as u64;

    if file.size_bytes != actual {
        return Err(ComposerError::Validation(format!(
            "'{}' declares {} bytes but content is {} bytes",
            file.name, file.size_bytes, actual
        )));
    }

    if let Some(max) = config.max_attachment_bytes {
        if actual > max {
            return Err(ComposerError::Validation(format!(
                "'{}' is {} bytes, exceeding the {} byte limit",
                file.name, actual, max
            )));
        }
    }

    Ok(())
}

/// Validate a batch of file inputs, including the attachment count limit
///
/// `staged_count` is the number of attachments already in the draft. The whole
/// batch is checked up front so callers can append all-or-nothing.
///
/// # Errors
///
/// Returns `ComposerError::Validation` on the first failing check.
pub fn validate_batch(
    files: &[FileInput],
    staged_count: usize,
    config: &ComposerConfig,
) -> Result<()> {
    if let Some(max) = config.max_attachments {
        if staged_count + files.len() > max {
            return Err(ComposerError::Validation(format!(
                "attaching {} file(s) would exceed the limit of {} attachments",
                files.len(),
                max
            )));
        }
    }

    for file in files {
        validate_file(file, config)?;
    }

    Ok(())
}
