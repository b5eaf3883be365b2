//! Error types for run configuration.

use thiserror::Error;

/// Errors raised while building the run configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable: {name}")]
    MissingVar {
        /// Name of the missing variable
        name: String,
    },

    /// A variable is set but its value cannot be used
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// Name of the offending variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::MissingVar {
            name: "GATEWATCH_URL".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing required environment variable: GATEWATCH_URL"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            name: "GATEWATCH_REPLY_WAIT_SECS".to_string(),
            reason: "not a number".to_string(),
        };
        assert!(err.to_string().contains("GATEWATCH_REPLY_WAIT_SECS"));
        assert!(err.to_string().contains("not a number"));
    }
}
