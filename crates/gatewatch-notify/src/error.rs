//! Error types for the messaging gateway.

use thiserror::Error;

/// Errors raised by chat gateway operations.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// HTTP transport failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered but refused the call
    #[error("{method} failed: {reason}")]
    Api {
        /// API method that was called
        method: String,
        /// Failure reason reported by the API
        reason: String,
    },

    /// Could not read the file being uploaded
    #[error("upload read failed for {path}: {source}")]
    UploadRead {
        /// Path of the file that could not be read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = NotifyError::Api {
            method: "chat.postMessage".to_string(),
            reason: "channel_not_found".to_string(),
        };
        assert_eq!(err.to_string(), "chat.postMessage failed: channel_not_found");
    }
}
