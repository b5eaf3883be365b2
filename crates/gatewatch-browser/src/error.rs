use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowserError>;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("chromium error: {0}")]
    ChromiumError(String),

    #[error("navigation failed: {0}")]
    NavigationError(String),

    #[error("selector not found: {0}")]
    SelectorNotFound(String),

    #[error("timed out after {timeout_ms}ms waiting for selector: {selector}")]
    Timeout { selector: String, timeout_ms: u64 },

    #[error("screenshot failed: {0}")]
    ScreenshotError(String),
}

impl BrowserError {
    /// Whether this error means an expected element was absent, as opposed
    /// to the driver itself failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SelectorNotFound(_) | Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BrowserError::NavigationError("page not found".to_string());
        assert_eq!(err.to_string(), "navigation failed: page not found");
    }

    #[test]
    fn test_timeout_display() {
        let err = BrowserError::Timeout {
            selector: "#continue".to_string(),
            timeout_ms: 10_000,
        };
        assert!(err.to_string().contains("#continue"));
        assert!(err.to_string().contains("10000"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(BrowserError::SelectorNotFound("#x".to_string()).is_not_found());
        assert!(BrowserError::Timeout {
            selector: "#x".to_string(),
            timeout_ms: 1
        }
        .is_not_found());
        assert!(!BrowserError::ChromiumError("boom".to_string()).is_not_found());
    }
}
