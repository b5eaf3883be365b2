//! The screenshot → notify → poll → submit sequence.

use crate::error::Result;
use chrono::Utc;
use gatewatch_browser::PageDriver;
use gatewatch_core::{pacing, remove_artifacts, screenshot_filename, RunConfig, RunOutcome};
use gatewatch_notify::{mention_line, ChatGateway};
use std::path::PathBuf;
use tokio::time::Instant;

/// How long to wait for the continue affordance before giving up.
const GATE_WAIT_MS: u64 = 10_000;
/// How long to wait for the calendar affordance after submitting.
const CALENDAR_WAIT_MS: u64 = 10_000;
/// Zoom applied before each capture so the CAPTCHA glyph is legible.
const CAPTCHA_ZOOM_PERCENT: u32 = 200;

/// Sent when the continue affordance never appears.
pub const BLOCKED_MESSAGE: &str = "Failed to go to page before captcha";
/// Sent when no qualifying reply arrives within the maximum wait.
pub const TIMED_OUT_MESSAGE: &str = "Could not go past captcha page";
/// Prefix of the follow-up listing artifacts that could not be removed.
pub const CLEANUP_MESSAGE_PREFIX: &str = "These files were not deleted: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Start,
    AtGate,
    AwaitingReply,
    Replied,
    Unlocked,
    Done,
    Blocked,
    TimedOut,
}

fn log_state(state: GateState) {
    tracing::info!(state = ?state, "confirmation protocol");
}

/// One run of the confirmation protocol.
///
/// Holds references to its collaborators and the immutable run context;
/// all side effects happen in [`run`](Self::run), in strict order.
pub struct ConfirmationProtocol<'a, D, G> {
    driver: &'a D,
    gateway: &'a G,
    config: &'a RunConfig,
}

impl<'a, D, G> ConfirmationProtocol<'a, D, G>
where
    D: PageDriver,
    G: ChatGateway,
{
    /// Wire a protocol run against a page driver and a chat gateway.
    pub fn new(driver: &'a D, gateway: &'a G, config: &'a RunConfig) -> Self {
        Self {
            driver,
            gateway,
            config,
        }
    }

    /// Drive the protocol to a terminal outcome.
    ///
    /// Gate-navigation failure and reply timeout come back as outcomes,
    /// each after exactly one explanatory channel message. Collaborator
    /// failures propagate as errors.
    pub async fn run(&self) -> Result<RunOutcome> {
        log_state(GateState::Start);
        let mentions = mention_line(&self.config.responders);
        let selectors = &self.config.selectors;

        self.driver.navigate(&self.config.url).await?;

        match self
            .driver
            .wait_for_selector(&selectors.continue_link, GATE_WAIT_MS)
            .await
        {
            Ok(()) => {}
            Err(err) if err.is_not_found() => {
                log_state(GateState::Blocked);
                tracing::warn!(%err, "continue affordance never appeared");
                self.notify(&format!("{mentions} {BLOCKED_MESSAGE}")).await?;
                return Ok(RunOutcome::Blocked);
            }
            Err(err) => return Err(err.into()),
        }
        self.driver.click(&selectors.continue_link).await?;
        log_state(GateState::AtGate);

        let captcha_shot = self.capture_and_send(&mentions).await?;
        tracing::info!("captcha screenshot sent, waiting for reply");
        log_state(GateState::AwaitingReply);

        let Some(answer) = self.await_reply().await? else {
            log_state(GateState::TimedOut);
            self.notify(&format!("{mentions} {TIMED_OUT_MESSAGE}"))
                .await?;
            return Ok(RunOutcome::TimedOut);
        };
        log_state(GateState::Replied);

        tracing::info!("entering captcha answer and submitting");
        self.driver
            .type_text(&selectors.captcha_input, &answer)
            .await?;
        pacing::typing_jitter().wait().await;
        self.driver.click(&selectors.captcha_submit).await?;
        log_state(GateState::Unlocked);

        if let Err(err) = self
            .driver
            .wait_for_selector(&selectors.calendar, CALENDAR_WAIT_MS)
            .await
        {
            if err.is_not_found() {
                // Mirrors the observed behavior: the final screenshot is
                // captured and sent even when the calendar affordance was
                // never confirmed.
                tracing::warn!(%err, "calendar affordance not confirmed, continuing");
            } else {
                return Err(err.into());
            }
        }
        let calendar_shot = self.capture_and_send(&mentions).await?;
        tracing::info!("calendar screenshot sent, cleaning up artifacts");

        let mut artifacts = vec![captcha_shot, calendar_shot];
        artifacts.dedup();
        let survivors = remove_artifacts(&artifacts);
        log_state(GateState::Done);

        if survivors.is_empty() {
            return Ok(RunOutcome::Succeeded);
        }
        let listing = survivors
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.notify(&format!("{CLEANUP_MESSAGE_PREFIX}{listing}"))
            .await?;
        Ok(RunOutcome::CleanupIncomplete { files: survivors })
    }

    /// Zoom, screenshot to a timestamped file, and upload it with the
    /// responder mentions as caption. At most one capture per milestone.
    async fn capture_and_send(&self, caption: &str) -> Result<PathBuf> {
        let path = self.config.artifact_dir.join(screenshot_filename(Utc::now()));
        self.driver.set_zoom(CAPTCHA_ZOOM_PERCENT).await?;
        self.driver.screenshot_to(&path).await?;
        self.gateway
            .send_image(&self.config.channel, &path, caption)
            .await?;
        Ok(path)
    }

    /// Poll the channel for the latest message until an authorized
    /// responder answers or the deadline passes.
    ///
    /// A message from anyone outside the authorized set is ambient chatter
    /// and is treated the same as no message at all.
    async fn await_reply(&self) -> Result<Option<String>> {
        let started = Instant::now();
        while started.elapsed() < self.config.reply_wait {
            if let Some(observation) = self.gateway.fetch_latest(&self.config.channel).await? {
                if self.config.responders.contains(&observation.author) {
                    tracing::info!(author = %observation.author, "qualifying reply received");
                    return Ok(Some(observation.text));
                }
            }
            tracing::info!("no response yet");
            tokio::time::sleep(self.config.poll_interval).await;
        }
        Ok(None)
    }

    async fn notify(&self, text: &str) -> Result<()> {
        self.gateway.send_text(&self.config.channel, text).await?;
        Ok(())
    }
}
