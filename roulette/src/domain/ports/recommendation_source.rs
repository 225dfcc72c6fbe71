//! Driven port for fetching one restaurant recommendation.
//!
//! The domain owns the request shape so the state machine can stay agnostic
//! of which model or prompt produces the place.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Coordinates, Filters, Language, Place, PriceBand};

/// Everything the recommendation source needs for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    /// Where the user is.
    pub coordinates: Coordinates,
    /// Filters in effect when the request was issued.
    pub filters: Filters,
    /// Names of recently recommended places, newest first. Advisory only.
    pub exclude_names: Vec<String>,
    /// Language the `reason` prose must be written in.
    pub language: Language,
}

define_port_error! {
    /// Errors surfaced while fetching a recommendation.
    pub enum RecommendationSourceError {
        /// Network transport failed before a usable response arrived.
        Transport { message: String } =>
            "recommendation transport failed: {message}",
        /// The model answered with an error, a block, or no content.
        Model { message: String } =>
            "recommendation model failed: {message}",
        /// The model's answer did not match the place schema.
        Decode { message: String } =>
            "recommendation response decode failed: {message}",
        /// Failure outside the recommendation service itself.
        Unexpected { message: String } =>
            "{message}",
    }
}

impl RecommendationSourceError {
    /// Whether this is one of the opaque "recommendation service failed"
    /// kinds, all of which share one user-facing message.
    #[must_use]
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Model { .. } | Self::Decode { .. }
        )
    }
}

/// Port producing one recommendation per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Recommend one place for `request`.
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Place, RecommendationSourceError>;
}

/// Fixture implementation returning one canned place near the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRecommendationSource;

impl FixtureRecommendationSource {
    /// The canned place for `request`, skipping "Fixture Kitchen" when it
    /// was recommended recently.
    pub fn place_for(request: &RecommendationRequest) -> Result<Place, RecommendationSourceError> {
        let name = if request.exclude_names.iter().any(|name| name == "Fixture Kitchen") {
            "Fixture Noodle Bar"
        } else {
            "Fixture Kitchen"
        };
        Ok(Place {
            id: format!("fixture:{}", name.to_lowercase().replace(' ', "-")),
            name: name.to_owned(),
            category: "Korean".to_owned(),
            phone: None,
            location: request.coordinates,
            address: "1 Fixture-ro".to_owned(),
            distance_meters: 350.0,
            price_band: PriceBand::Normal,
            rating: Some(4.2),
            review_count: Some(128),
            photo_url: None,
            reason: "A dependable neighbourhood favourite.".to_owned(),
        }
        .with_placeholder_photo())
    }
}

#[async_trait]
impl RecommendationSource for FixtureRecommendationSource {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Place, RecommendationSourceError> {
        Self::place_for(request)
    }
}
