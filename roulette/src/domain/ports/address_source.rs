//! Driven port for reverse-geocoding coordinates into a street address.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Coordinates, Language};

define_port_error! {
    /// Errors surfaced while resolving an address.
    pub enum AddressSourceError {
        /// Network transport failed.
        Transport { message: String } =>
            "address transport failed: {message}",
        /// The model answered with an error, a block, or no content.
        Model { message: String } =>
            "address model failed: {message}",
        /// The answer held no usable address text.
        Empty =>
            "address response was empty",
    }
}

/// Port resolving a human-readable address for a position.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Return a single-line street address for `coordinates`.
    async fn lookup(
        &self,
        coordinates: &Coordinates,
        language: Language,
    ) -> Result<String, AddressSourceError>;
}

/// Fixture implementation echoing the coordinates back.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAddressSource;

#[async_trait]
impl AddressSource for FixtureAddressSource {
    async fn lookup(
        &self,
        coordinates: &Coordinates,
        _language: Language,
    ) -> Result<String, AddressSourceError> {
        Ok(format!("near {coordinates}"))
    }
}
