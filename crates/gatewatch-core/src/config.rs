//! Run configuration for gatewatch.
//!
//! The configuration is sourced from environment variables once at startup
//! and stays immutable for the lifetime of the run. It is passed by
//! reference into the protocol rather than read from ambient globals.

use crate::error::{ConfigError, ConfigResult};
use std::path::PathBuf;
use std::time::Duration;

/// CSS selectors for the page elements the protocol interacts with.
#[derive(Debug, Clone)]
pub struct GateSelectors {
    /// The "continue" affordance on the landing page
    pub continue_link: String,
    /// The CAPTCHA answer input field
    pub captcha_input: String,
    /// The CAPTCHA submit affordance
    pub captcha_submit: String,
    /// An affordance that only exists on the unlocked calendar page
    pub calendar: String,
}

/// Immutable context for a single run.
///
/// Built from the environment with [`RunConfig::from_env`]:
///
/// - `GATEWATCH_URL` - page to load before the CAPTCHA gate
/// - `GATEWATCH_CONTINUE_SELECTOR` / `GATEWATCH_CAPTCHA_INPUT_SELECTOR` /
///   `GATEWATCH_CAPTCHA_SUBMIT_SELECTOR` / `GATEWATCH_CALENDAR_SELECTOR`
/// - `GATEWATCH_SLACK_TOKEN` / `GATEWATCH_SLACK_CHANNEL`
/// - `GATEWATCH_RESPONDER_IDS` - comma-separated Slack user ids whose
///   replies count as CAPTCHA answers
/// - `GATEWATCH_REPLY_WAIT_SECS` / `GATEWATCH_POLL_INTERVAL_SECS`
/// - `GATEWATCH_ARTIFACT_DIR` - where screenshots land (optional,
///   defaults to the working directory)
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Target URL loaded at the start of the run
    pub url: String,
    /// Page element selectors
    pub selectors: GateSelectors,
    /// Slack channel id the screenshots and notifications go to
    pub channel: String,
    /// User ids whose replies are accepted as CAPTCHA answers
    pub responders: Vec<String>,
    /// Maximum time to wait for a qualifying reply
    pub reply_wait: Duration,
    /// Interval between reply polls
    pub poll_interval: Duration,
    /// Slack bot token. Never logged.
    pub slack_token: String,
    /// Directory where screenshot artifacts are written
    pub artifact_dir: PathBuf,
}

impl RunConfig {
    /// Build the run configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any variable is missing, a duration fails to
    /// parse, or the responder list is empty.
    pub fn from_env() -> ConfigResult<Self> {
        let responders = split_responder_ids(&required("GATEWATCH_RESPONDER_IDS")?);
        if responders.is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "GATEWATCH_RESPONDER_IDS".to_string(),
                reason: "no responder ids after splitting on commas".to_string(),
            });
        }

        Ok(Self {
            url: required("GATEWATCH_URL")?,
            selectors: GateSelectors {
                continue_link: required("GATEWATCH_CONTINUE_SELECTOR")?,
                captcha_input: required("GATEWATCH_CAPTCHA_INPUT_SELECTOR")?,
                captcha_submit: required("GATEWATCH_CAPTCHA_SUBMIT_SELECTOR")?,
                calendar: required("GATEWATCH_CALENDAR_SELECTOR")?,
            },
            channel: required("GATEWATCH_SLACK_CHANNEL")?,
            responders,
            reply_wait: Duration::from_secs(required_secs("GATEWATCH_REPLY_WAIT_SECS")?),
            poll_interval: Duration::from_secs(required_secs("GATEWATCH_POLL_INTERVAL_SECS")?),
            slack_token: required("GATEWATCH_SLACK_TOKEN")?,
            artifact_dir: std::env::var("GATEWATCH_ARTIFACT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        })
    }
}

/// Split a comma-separated responder id list, trimming whitespace and
/// dropping empty entries.
pub fn split_responder_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn required(name: &str) -> ConfigResult<String> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar {
        name: name.to_string(),
    })
}

fn required_secs(name: &str) -> ConfigResult<u64> {
    let raw = required(name)?;
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: format!("expected whole seconds, got {raw:?}"),
    })
}
