//! Human-in-the-loop confirmation protocol for the gatewatch CAPTCHA relay.
//!
//! The protocol drives one run through a fixed sequence: click past the
//! landing page, screenshot the CAPTCHA gate, relay it to the channel, poll
//! for a typed reply from an authorized responder under a wall-clock
//! deadline, submit the reply, screenshot the unlocked calendar, and clean
//! up the artifacts.
//!
//! It talks to the outside world only through the [`PageDriver`] and
//! [`ChatGateway`] seams, so both collaborators can be faked in tests.
//!
//! [`PageDriver`]: gatewatch_browser::PageDriver
//! [`ChatGateway`]: gatewatch_notify::ChatGateway

pub mod confirm;
pub mod error;

pub use confirm::{ConfirmationProtocol, BLOCKED_MESSAGE, CLEANUP_MESSAGE_PREFIX, TIMED_OUT_MESSAGE};
pub use error::{ProtocolError, Result};
