//! Slack messaging gateway for the gatewatch CAPTCHA relay.
//!
//! Exposes the narrow [`ChatGateway`] seam the confirmation protocol talks
//! through: send a text, upload a screenshot with a caption, and read back
//! the single most recent channel message.

pub mod error;
pub mod gateway;
pub mod slack;

pub use error::{NotifyError, Result};
pub use gateway::{mention_line, ChatGateway};
pub use slack::SlackGateway;
