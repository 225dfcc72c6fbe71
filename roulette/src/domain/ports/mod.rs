//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod address_source;
mod link_opener;
mod location_provider;
mod recommendation_source;

#[cfg(test)]
pub use address_source::MockAddressSource;
pub use address_source::{AddressSource, AddressSourceError, FixtureAddressSource};
#[cfg(test)]
pub use link_opener::MockLinkOpener;
pub use link_opener::{LinkOpener, LinkOpenerError, NoOpLinkOpener};
#[cfg(test)]
pub use location_provider::MockLocationProvider;
pub use location_provider::{
    LOCATION_TIMEOUT, LocationError, LocationProvider, LocationRequestOptions,
};
#[cfg(test)]
pub use recommendation_source::MockRecommendationSource;
pub use recommendation_source::{
    FixtureRecommendationSource, RecommendationRequest, RecommendationSource,
    RecommendationSourceError,
};
