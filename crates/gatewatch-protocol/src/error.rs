//! Error types for the confirmation protocol.

use thiserror::Error;

/// Errors that abort a protocol run.
///
/// Gate-navigation failure and reply timeout are not errors; they are
/// [`RunOutcome`](gatewatch_core::RunOutcome) variants. Everything below is
/// a collaborator failing outright, which propagates fatally.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The browser driver failed
    #[error("browser: {0}")]
    Browser(#[from] gatewatch_browser::BrowserError),

    /// The messaging gateway failed
    #[error("gateway: {0}")]
    Notify(#[from] gatewatch_notify::NotifyError),
}

/// Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
