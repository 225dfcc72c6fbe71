//! Driven port for handing an external URL to the platform.
//!
//! Opening a link is fire-and-forget: the caller logs failures and never
//! waits for the opened context.

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while launching the opener.
    pub enum LinkOpenerError {
        /// The platform opener could not be started.
        Launch { message: String } =>
            "failed to open link: {message}",
    }
}

/// Port opening a URL in a new browsing context.
#[cfg_attr(test, mockall::automock)]
pub trait LinkOpener: Send + Sync {
    /// Start opening `url` without waiting for it.
    fn open(&self, url: &str) -> Result<(), LinkOpenerError>;
}

/// Opener that discards every link.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLinkOpener;

impl LinkOpener for NoOpLinkOpener {
    fn open(&self, _url: &str) -> Result<(), LinkOpenerError> {
        Ok(())
    }
}
