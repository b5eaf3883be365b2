//! Protocol outcome and reply observation types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The single most recent channel message at poll time.
///
/// Re-fetched on every poll tick, never persisted. Only qualifies as a
/// CAPTCHA answer if `author` is in the authorized responder set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyObservation {
    /// Identity of the message author
    pub author: String,
    /// Message text
    pub text: String,
}

/// Terminal outcome of one confirmation protocol run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RunOutcome {
    /// The continue affordance never appeared; the run stopped before the
    /// CAPTCHA page
    Blocked,

    /// No qualifying reply arrived within the maximum wait
    TimedOut,

    /// CAPTCHA submitted and calendar screenshot delivered, all artifacts
    /// cleaned up
    Succeeded,

    /// Run otherwise succeeded but some screenshot files could not be
    /// removed
    CleanupIncomplete {
        /// Artifact files still on disk
        files: Vec<PathBuf>,
    },
}

impl RunOutcome {
    /// Check whether the run got past the CAPTCHA gate.
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        matches!(self, Self::Succeeded | Self::CleanupIncomplete { .. })
    }

    /// Check whether the run ended with every side effect completed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unlocked() {
        assert!(RunOutcome::Succeeded.is_unlocked());
        assert!(RunOutcome::CleanupIncomplete { files: vec![] }.is_unlocked());
        assert!(!RunOutcome::Blocked.is_unlocked());
        assert!(!RunOutcome::TimedOut.is_unlocked());
    }

    #[test]
    fn test_is_success() {
        assert!(RunOutcome::Succeeded.is_success());
        assert!(!RunOutcome::CleanupIncomplete {
            files: vec![PathBuf::from("a.png")]
        }
        .is_success());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = RunOutcome::CleanupIncomplete {
            files: vec![PathBuf::from("03Feb2026_141503.png")],
        };
        let json = serde_json::to_string(&outcome).expect("serialize outcome");
        let parsed: RunOutcome = serde_json::from_str(&json).expect("parse outcome");
        assert_eq!(parsed, outcome);
    }
}
