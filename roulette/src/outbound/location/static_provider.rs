//! Location provider answering from a fixed position.

use async_trait::async_trait;

use crate::domain::Coordinates;
use crate::domain::ports::{LocationError, LocationProvider, LocationRequestOptions};

/// Central Seoul (Gangnam station), used when no position is configured.
pub const DEFAULT_STATIC_LOCATION: (f64, f64) = (37.4979, 127.0276);

/// Provider that always reports the same position, or always reports that
/// no capability exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticLocationProvider {
    position: Option<Coordinates>,
}

impl StaticLocationProvider {
    /// Provider that always answers `position`.
    #[must_use]
    pub fn new(position: Coordinates) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// Provider for platforms without any location capability.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { position: None }
    }
}

#[async_trait]
impl LocationProvider for StaticLocationProvider {
    async fn request(
        &self,
        _options: &LocationRequestOptions,
    ) -> Result<Coordinates, LocationError> {
        self.position.ok_or(LocationError::CapabilityUnavailable)
    }
}
