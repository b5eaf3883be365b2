use crate::error::Result;
use std::path::Path;

/// Page operations the confirmation protocol drives.
///
/// The protocol only ever talks to the browser through this seam, which
/// keeps it testable with an in-memory fake.
#[async_trait::async_trait]
pub trait PageDriver: Send + Sync {
    /// Navigate to a URL
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Wait for a selector to appear, polling until the deadline.
    ///
    /// An absent element is reported as [`BrowserError::Timeout`], an
    /// explicit not-found marker rather than a silent null threaded
    /// through later calls.
    ///
    /// [`BrowserError::Timeout`]: crate::error::BrowserError::Timeout
    async fn wait_for_selector(&self, selector: &str, timeout_ms: u64) -> Result<()>;

    /// Click an element by selector
    async fn click(&self, selector: &str) -> Result<()>;

    /// Type text into an element by selector
    async fn type_text(&self, selector: &str, value: &str) -> Result<()>;

    /// Set the page body zoom, in percent
    async fn set_zoom(&self, percent: u32) -> Result<()>;

    /// Capture a PNG screenshot of the current page to `path`
    async fn screenshot_to(&self, path: &Path) -> Result<()>;
}
