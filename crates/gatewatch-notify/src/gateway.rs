use crate::error::Result;
use gatewatch_core::ReplyObservation;
use std::path::Path;

/// Chat operations the confirmation protocol consumes.
///
/// Delivery acknowledgments are discarded; the protocol only cares that the
/// call succeeded.
#[async_trait::async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send a text message to a channel
    async fn send_text(&self, channel: &str, text: &str) -> Result<()>;

    /// Upload an image file to a channel with a caption
    async fn send_image(&self, channel: &str, file: &Path, caption: &str) -> Result<()>;

    /// Fetch the single most recent message in a channel, if any
    async fn fetch_latest(&self, channel: &str) -> Result<Option<ReplyObservation>>;
}

/// Build a mention string for the given user ids: `<@U1> <@U2>`.
pub fn mention_line(user_ids: &[String]) -> String {
    user_ids
        .iter()
        .map(|id| format!("<@{id}>"))
        .collect::<Vec<_>>()
        .join(" ")
}
