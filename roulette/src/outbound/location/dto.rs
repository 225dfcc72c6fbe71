//! DTO for the `ip-api.com` JSON response.

use serde::Deserialize;

use crate::domain::Coordinates;
use crate::domain::ports::LocationError;

const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Deserialize)]
pub(super) struct IpLocationDto {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl IpLocationDto {
    pub(super) fn into_coordinates(self) -> Result<Coordinates, LocationError> {
        if self.status != STATUS_SUCCESS {
            return Err(LocationError::position_unavailable(
                self.message
                    .unwrap_or_else(|| format!("lookup status {}", self.status)),
            ));
        }
        let (Some(latitude), Some(longitude)) = (self.lat, self.lon) else {
            return Err(LocationError::unknown("response is missing lat/lon"));
        };
        Coordinates::new(latitude, longitude)
            .map_err(|error| LocationError::unknown(format!("response position is invalid: {error}")))
    }
}
