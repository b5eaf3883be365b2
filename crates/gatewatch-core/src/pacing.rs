//! Delays used to throttle polling and to mimic human pacing.

use rand::Rng;
use std::time::Duration;

/// Upper bound (exclusive) for randomized minute and second draws.
const JITTER_BOUND: u64 = 29;

/// A blocking pause of fixed, randomized, or zero duration.
///
/// `Randomized` draws independent uniform minute and second components so
/// that input timing never looks perfectly periodic, which on some gated
/// sites is itself a bot signal. `Bypass` is a no-op for callers that
/// supply their own tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Pause for exactly `minutes` and `seconds`
    Fixed {
        /// Whole minutes
        minutes: u64,
        /// Whole seconds
        seconds: u64,
    },
    /// Pause for a jittered duration drawn from `[0, 28m28s]`
    Randomized,
    /// Do not pause at all
    Bypass,
}

impl Pacing {
    /// Resolve this pacing to a concrete duration.
    ///
    /// `Randomized` draws fresh components on every call.
    pub fn duration(&self) -> Duration {
        match self {
            Self::Fixed { minutes, seconds } => Duration::from_secs(minutes * 60 + seconds),
            Self::Randomized => {
                let mut rng = rand::thread_rng();
                let minutes = rng.gen_range(0..JITTER_BOUND);
                let seconds = rng.gen_range(0..JITTER_BOUND);
                Duration::from_secs(minutes * 60 + seconds)
            }
            Self::Bypass => Duration::ZERO,
        }
    }

    /// Sleep for the resolved duration. A zero duration returns immediately.
    pub async fn wait(&self) {
        let duration = self.duration();
        if duration.is_zero() {
            return;
        }
        tracing::trace!(?duration, "pacing delay");
        tokio::time::sleep(duration).await;
    }
}

/// A short random pause before clicking submit, approximating human typing
/// latency. Uniform over 3..=6 seconds.
pub fn typing_jitter() -> Pacing {
    Pacing::Fixed {
        minutes: 0,
        seconds: rand::thread_rng().gen_range(3..7),
    }
}
