//! Headless browser driver for the gatewatch CAPTCHA relay.
//!
//! Wraps chromiumoxide behind the narrow [`PageDriver`] seam the
//! confirmation protocol drives: load a URL, wait for a selector under a
//! deadline, click, type, zoom, and screenshot to a file.

pub mod driver;
pub mod engine;
pub mod error;

pub use driver::PageDriver;
pub use engine::BrowserEngine;
pub use error::{BrowserError, Result};
