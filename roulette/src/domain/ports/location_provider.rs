//! Driven port for acquiring the user's current position.
//!
//! The platform capability is asynchronous and cannot be cancelled; the
//! orchestrator bounds each request with the timeout carried in
//! [`LocationRequestOptions`] and ignores superseded results.

use std::time::Duration;

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::Coordinates;

/// How long one location request may take before it fails with a timeout.
pub const LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Options passed with every location request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequestOptions {
    /// Ask for the most precise fix the capability can give.
    pub high_accuracy: bool,
    /// Upper bound on how long the request may take.
    pub timeout: Duration,
    /// Oldest cached position the capability may return. Zero disables reuse.
    pub maximum_age: Duration,
}

impl Default for LocationRequestOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: LOCATION_TIMEOUT,
            maximum_age: Duration::ZERO,
        }
    }
}

define_port_error! {
    /// Errors surfaced while acquiring a position.
    pub enum LocationError {
        /// The user or platform refused access to the position.
        PermissionDenied { message: String } =>
            "location permission denied: {message}",
        /// The capability could not determine a position.
        PositionUnavailable { message: String } =>
            "location unavailable: {message}",
        /// No position arrived within the request timeout.
        Timeout { message: String } =>
            "location request timed out: {message}",
        /// Any other failure.
        Unknown { message: String } =>
            "location request failed: {message}",
        /// No location capability exists on this platform.
        CapabilityUnavailable =>
            "location capability is not available",
    }
}

/// Port for one-shot position lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolve the current position.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use roulette::domain::ports::{LocationProvider, LocationRequestOptions};
    /// use roulette::outbound::location::StaticLocationProvider;
    ///
    /// let provider = StaticLocationProvider::unavailable();
    /// let err = provider
    ///     .request(&LocationRequestOptions::default())
    ///     .await
    ///     .expect_err("no capability");
    /// ```
    async fn request(
        &self,
        options: &LocationRequestOptions,
    ) -> Result<Coordinates, LocationError>;
}
