//! Gatewatch Core - Foundation crate for the gatewatch CAPTCHA relay.
//!
//! This crate provides the shared types that all other gatewatch crates
//! depend on: the environment-sourced run configuration, pacing delays,
//! screenshot artifact handling, and the protocol outcome types.
//!
//! # Modules
//!
//! - [`error`] - Configuration error types using thiserror
//! - [`config`] - Environment-sourced immutable run configuration
//! - [`pacing`] - Fixed, randomized, and bypass delays
//! - [`artifact`] - Timestamped screenshot names and best-effort cleanup
//! - [`outcome`] - Protocol outcome and reply observation types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod artifact;
pub mod config;
pub mod error;
pub mod outcome;
pub mod pacing;

pub use artifact::{remove_artifacts, screenshot_filename};
pub use config::RunConfig;
pub use error::{ConfigError, ConfigResult};
pub use outcome::{ReplyObservation, RunOutcome};
pub use pacing::Pacing;
