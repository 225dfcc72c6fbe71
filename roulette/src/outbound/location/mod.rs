//! Location outbound adapters.

mod dto;
mod ip_provider;
mod static_provider;

pub use ip_provider::{DEFAULT_IP_LOCATION_ENDPOINT, IpLocationProvider};
pub use static_provider::{DEFAULT_STATIC_LOCATION, StaticLocationProvider};
