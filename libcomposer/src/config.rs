//! Composer configuration
//!
//! Attachment limits are optional; an unset limit means unlimited. Limits can
//! come from three layers, strongest first: an explicit TOML config, the
//! `COMPOSER_MAX_ATTACHMENT_BYTES` / `COMPOSER_MAX_ATTACHMENTS` environment
//! variables, and finally unlimited.

use serde::Deserialize;

use crate::error::ConfigError;

/// Limits applied when staging attachments
///
/// Fields missing from a TOML config fall back to the environment variables,
/// then to unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComposerConfig {
    /// Maximum size of a single attachment in bytes
    pub max_attachment_bytes: Option<u64>,
    /// Maximum number of staged attachments per draft
    pub max_attachments: Option<usize>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        let max_attachment_bytes = std::env::var("COMPOSER_MAX_ATTACHMENT_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|v| *v > 0);

        let max_attachments = std::env::var("COMPOSER_MAX_ATTACHMENTS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|v| *v > 0);

        Self {
            max_attachment_bytes,
            max_attachments,
        }
    }
}

impl ComposerConfig {
    /// Configuration with no limits at all, ignoring the environment
    pub fn unlimited() -> Self {
        Self {
            max_attachment_bytes: None,
            max_attachments: None,
        }
    }

    /// Parse configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a limit is zero.
    pub fn from_toml_str(s: &str) -> std::result::Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.max_attachment_bytes == Some(0) {
            return Err(ConfigError::InvalidLimit(
                "max_attachment_bytes must be > 0".to_string(),
            ));
        }
        if self.max_attachments == Some(0) {
            return Err(ConfigError::InvalidLimit(
                "max_attachments must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_unlimited_has_no_limits() {
        let config = ComposerConfig::unlimited();

        assert_eq!(config.max_attachment_bytes, None);
        assert_eq!(config.max_attachments, None);
    }

    #[test]
    fn test_from_toml_str_full() {
        let config = ComposerConfig::from_toml_str(
            r#"
            max_attachment_bytes = 1048576
            max_attachments = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.max_attachment_bytes, Some(1_048_576));
        assert_eq!(config.max_attachments, Some(4));
    }

    #[test]
    #[serial]
    fn test_from_toml_str_empty_falls_back_to_env() {
        std::env::remove_var("COMPOSER_MAX_ATTACHMENT_BYTES");
        std::env::remove_var("COMPOSER_MAX_ATTACHMENTS");

        let config = ComposerConfig::from_toml_str("").unwrap();

        assert_eq!(config.max_attachment_bytes, None);
        assert_eq!(config.max_attachments, None);
    }

    #[test]
    fn test_from_toml_str_rejects_zero_limit() {
        let result = ComposerConfig::from_toml_str("max_attachments = 0");

        match result {
            Err(ConfigError::InvalidLimit(msg)) => {
                assert!(msg.contains("max_attachments"));
            }
            _ => panic!("Expected ConfigError::InvalidLimit"),
        }
    }

    #[test]
    fn test_from_toml_str_rejects_zero_bytes_limit() {
        let result = ComposerConfig::from_toml_str("max_attachment_bytes = 0");
        assert!(matches!(result, Err(ConfigError::InvalidLimit(_))));
    }

    #[test]
    fn test_from_toml_str_rejects_unknown_field() {
        let result = ComposerConfig::from_toml_str("max_uploads = 3");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_from_toml_str_malformed() {
        let result = ComposerConfig::from_toml_str("max_attachments = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    #[serial]
    fn test_default_reads_env_overrides() {
        std::env::set_var("COMPOSER_MAX_ATTACHMENT_BYTES", "2048");
        std::env::set_var("COMPOSER_MAX_ATTACHMENTS", "2");

        let config = ComposerConfig::default();

        assert_eq!(config.max_attachment_bytes, Some(2048));
        assert_eq!(config.max_attachments, Some(2));

        std::env::remove_var("COMPOSER_MAX_ATTACHMENT_BYTES");
        std::env::remove_var("COMPOSER_MAX_ATTACHMENTS");
    }

    #[test]
    #[serial]
    fn test_default_ignores_invalid_env_values() {
        std::env::set_var("COMPOSER_MAX_ATTACHMENT_BYTES", "not-a-number");
        std::env::set_var("COMPOSER_MAX_ATTACHMENTS", "0");

        let config = ComposerConfig::default();

        assert_eq!(config.max_attachment_bytes, None);
        assert_eq!(config.max_attachments, None);

        std::env::remove_var("COMPOSER_MAX_ATTACHMENT_BYTES");
        std::env::remove_var("COMPOSER_MAX_ATTACHMENTS");
    }
}
