//! Reqwest-backed location provider using an IP geolocation endpoint.
//!
//! Accuracy is city level at best, so `high_accuracy` is accepted but has no
//! effect. The request timeout comes from the options of each call.

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::IpLocationDto;
use crate::domain::Coordinates;
use crate::domain::ports::{LocationError, LocationProvider, LocationRequestOptions};

/// Default `ip-api.com` JSON endpoint.
pub const DEFAULT_IP_LOCATION_ENDPOINT: &str = "http://ip-api.com/json/";

/// Location provider resolving the caller's public IP to a position.
pub struct IpLocationProvider {
    client: Client,
    endpoint: Url,
}

impl IpLocationProvider {
    /// Build a provider for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint,
        })
    }
}

#[async_trait]
impl LocationProvider for IpLocationProvider {
    async fn request(
        &self,
        options: &LocationRequestOptions,
    ) -> Result<Coordinates, LocationError> {
        let mut request = self
            .client
            .get(self.endpoint.clone())
            .timeout(options.timeout);
        if options.maximum_age.is_zero() {
            request = request.header(CACHE_CONTROL, "no-cache");
        }
        debug!(endpoint = %self.endpoint, "requesting IP geolocation");

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(map_status_error(status));
        }
        let body = response.bytes().await.map_err(map_transport_error)?;
        let decoded: IpLocationDto = serde_json::from_slice(body.as_ref()).map_err(|error| {
            LocationError::unknown(format!("invalid geolocation payload: {error}"))
        })?;
        decoded.into_coordinates()
    }
}

fn map_transport_error(error: reqwest::Error) -> LocationError {
    if error.is_timeout() {
        LocationError::timeout(error.without_url().to_string())
    } else {
        LocationError::position_unavailable(error.without_url().to_string())
    }
}

fn map_status_error(status: StatusCode) -> LocationError {
    let message = format!("status {}", status.as_u16());
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            LocationError::permission_denied(message)
        }
        _ => LocationError::position_unavailable(message),
    }
}
