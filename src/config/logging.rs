//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Log filter and output format
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence when set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("LOGGING__LEVEL"));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info,cryptex_twin=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_enables_crate_debug() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info,cryptex_twin=debug");
        assert!(!config.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_level_is_rejected() {
        let config = LoggingConfig {
            level: "  ".to_string(),
            json: true,
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("LOGGING__LEVEL"))
        );
    }
}
