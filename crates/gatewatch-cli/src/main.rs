//! Gatewatch run driver.
//!
//! One process, one run: load the environment configuration, launch the
//! browser, drive the confirmation protocol to a terminal outcome, close
//! the browser. No retries; a failed run ends the process.

use anyhow::{Context, Result};
use gatewatch_browser::BrowserEngine;
use gatewatch_core::{RunConfig, RunOutcome};
use gatewatch_notify::SlackGateway;
use gatewatch_protocol::ConfirmationProtocol;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RunConfig::from_env().context("building run configuration")?;
    info!(
        poll_interval_secs = config.poll_interval.as_secs(),
        reply_wait_secs = config.reply_wait.as_secs(),
        "will check every poll interval within the reply wait window"
    );

    let gateway = SlackGateway::new(config.slack_token.clone());
    info!("slack gateway ready");

    let engine = BrowserEngine::launch()
        .await
        .context("launching browser engine")?;

    let protocol = ConfirmationProtocol::new(&engine, &gateway, &config);
    let outcome = protocol.run().await;

    // Shut the browser down before surfacing any protocol error.
    if let Err(err) = engine.close().await {
        tracing::warn!(%err, "browser shutdown failed");
    }

    match outcome.context("confirmation protocol run")? {
        RunOutcome::Succeeded => info!("run complete, calendar screenshot delivered"),
        RunOutcome::Blocked => info!("run ended before the captcha page"),
        RunOutcome::TimedOut => info!("run ended without a captcha reply"),
        RunOutcome::CleanupIncomplete { files } => info!(
            leftover = files.len(),
            "run complete, some artifacts were left on disk"
        ),
    }
    Ok(())
}
