//! Error types for configuration construction
//!
//! Configuration is the only place this workspace can fail loudly: a
//! malformed document or inconsistent settings are caught once, at
//! construction. Resolution itself never errors; missing pieces degrade to
//! sentinel outcomes.

use thiserror::Error;

/// Configuration construction error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be deserialized.
    #[error("Malformed configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required setting was present but empty.
    #[error("Setting `{0}` must not be empty")]
    EmptySetting(&'static str),

    /// The read-only prefix and the tab delimiter must be distinguishable.
    #[error("Read-only prefix and tab delimiter must differ")]
    PrefixDelimiterClash,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::EmptySetting("tab_delimiter").to_string(),
            "Setting `tab_delimiter` must not be empty"
        );
        assert_eq!(
            ConfigError::PrefixDelimiterClash.to_string(),
            "Read-only prefix and tab delimiter must differ"
        );
    }
}
