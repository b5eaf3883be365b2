//! Slack Web API gateway: post texts, upload screenshots, read back the
//! latest channel message.

use crate::error::{NotifyError, Result};
use crate::gateway::ChatGateway;
use gatewatch_core::ReplyObservation;
use reqwest::multipart;
use reqwest::Client;
use std::path::Path;

const SLACK_API_BASE: &str = "https://slack.com/api";

/// Slack messaging gateway. Token from config, never logged.
pub struct SlackGateway {
    token: String,
    client: Client,
}

impl SlackGateway {
    /// Create a gateway for the given bot token.
    pub fn new(token: String) -> Self {
        Self {
            token,
            client: Client::new(),
        }
    }

    async fn post_message(&self, channel: &str, text: &str) -> Result<()> {
        let url = format!("{SLACK_API_BASE}/chat.postMessage");
        let body = serde_json::json!({
            "channel": channel,
            "text": text,
        });
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        let envelope: ApiEnvelope = res.json().await?;
        envelope.into_result("chat.postMessage")
    }

    async fn upload_file(&self, channel: &str, file: &Path, caption: &str) -> Result<()> {
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|source| NotifyError::UploadRead {
                path: file.display().to_string(),
                source,
            })?;
        let filename = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "screenshot.png".to_string());

        let form = multipart::Form::new()
            .text("channels", channel.to_string())
            .text("initial_comment", caption.to_string())
            .part(
                "file",
                multipart::Part::bytes(bytes)
                    .file_name(filename)
                    .mime_str("image/png")?,
            );

        let url = format!("{SLACK_API_BASE}/files.upload");
        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .multipart(form)
            .send()
            .await?;
        let envelope: ApiEnvelope = res.json().await?;
        envelope.into_result("files.upload")
    }

    async fn latest_message(&self, channel: &str) -> Result<Option<ReplyObservation>> {
        let url = format!("{SLACK_API_BASE}/conversations.history");
        let res = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("channel", channel), ("limit", "1"), ("inclusive", "true")])
            .send()
            .await?;
        let history: HistoryResponse = res.json().await?;
        if !history.ok {
            return Err(NotifyError::Api {
                method: "conversations.history".to_string(),
                reason: history.error.unwrap_or_else(|| "unknown".to_string()),
            });
        }
        Ok(history.into_observation())
    }
}

#[async_trait::async_trait]
impl ChatGateway for SlackGateway {
    async fn send_text(&self, channel: &str, text: &str) -> Result<()> {
        tracing::debug!(channel, "posting text message");
        self.post_message(channel, text).await
    }

    async fn send_image(&self, channel: &str, file: &Path, caption: &str) -> Result<()> {
        tracing::debug!(channel, file = %file.display(), "uploading image");
        self.upload_file(channel, file, caption).await
    }

    async fn fetch_latest(&self, channel: &str) -> Result<Option<ReplyObservation>> {
        self.latest_message(channel).await
    }
}

/// Slack's standard `{ok, error}` response envelope.
#[derive(serde::Deserialize)]
struct ApiEnvelope {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl ApiEnvelope {
    fn into_result(self, method: &str) -> Result<()> {
        if self.ok {
            Ok(())
        } else {
            Err(NotifyError::Api {
                method: method.to_string(),
                reason: self.error.unwrap_or_else(|| "unknown".to_string()),
            })
        }
    }
}

#[derive(serde::Deserialize)]
struct HistoryResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    messages: Vec<SlackMessage>,
}

#[derive(serde::Deserialize)]
struct SlackMessage {
    /// Absent on bot and system messages.
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

impl HistoryResponse {
    /// The most recent message, if it has an identifiable human author.
    fn into_observation(self) -> Option<ReplyObservation> {
        let message = self.messages.into_iter().next()?;
        Some(ReplyObservation {
            author: message.user?,
            text: message.text.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_ok() {
        let envelope: ApiEnvelope = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(envelope.into_result("chat.postMessage").is_ok());
    }

    #[test]
    fn test_envelope_error() {
        let envelope: ApiEnvelope =
            serde_json::from_str(r#"{"ok": false, "error": "invalid_auth"}"#).unwrap();
        let err = envelope.into_result("chat.postMessage").unwrap_err();
        assert!(err.to_string().contains("invalid_auth"));
    }

    #[test]
    fn test_history_latest_message() {
        let history: HistoryResponse = serde_json::from_str(
            r#"{"ok": true, "messages": [{"user": "U123", "text": "A1B2C3"}, {"user": "U999", "text": "older"}]}"#,
        )
        .unwrap();
        let observation = history.into_observation().unwrap();
        assert_eq!(observation.author, "U123");
        assert_eq!(observation.text, "A1B2C3");
    }

    #[test]
    fn test_history_empty_channel() {
        let history: HistoryResponse =
            serde_json::from_str(r#"{"ok": true, "messages": []}"#).unwrap();
        assert!(history.into_observation().is_none());
    }

    #[test]
    fn test_history_bot_message_has_no_author() {
        let history: HistoryResponse =
            serde_json::from_str(r#"{"ok": true, "messages": [{"text": "posted by a bot"}]}"#)
                .unwrap();
        assert!(history.into_observation().is_none());
    }
}
