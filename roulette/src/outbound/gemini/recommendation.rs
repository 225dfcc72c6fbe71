//! Gemini-backed [`RecommendationSource`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::client::{ContentGenerator, GenerationError, GenerationRequest};
use super::dto::PlaceDto;
use super::prompt::recommendation_prompt;
use super::schema::place_schema;
use crate::domain::Place;
use crate::domain::ports::{
    RecommendationRequest, RecommendationSource, RecommendationSourceError,
};

/// Recommendation source asking the model for one place as structured JSON.
pub struct GeminiRecommendationSource {
    generator: Arc<dyn ContentGenerator>,
}

impl GeminiRecommendationSource {
    /// Adapter asking `generator` for places.
    #[must_use]
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl RecommendationSource for GeminiRecommendationSource {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Place, RecommendationSourceError> {
        let generation = GenerationRequest::json(recommendation_prompt(request), place_schema());
        let text = self
            .generator
            .generate(&generation)
            .await
            .map_err(map_generation_error)?;
        let place = parse_place(&text)?;
        debug!(name = %place.name, distance = place.distance_meters, "model recommended a place");
        Ok(place)
    }
}

fn map_generation_error(error: GenerationError) -> RecommendationSourceError {
    match error {
        GenerationError::Transport { .. } => RecommendationSourceError::transport(error.to_string()),
        GenerationError::Decode { .. } => RecommendationSourceError::decode(error.to_string()),
        GenerationError::Status { .. }
        | GenerationError::Blocked { .. }
        | GenerationError::NoCandidates => RecommendationSourceError::model(error.to_string()),
    }
}

fn parse_place(text: &str) -> Result<Place, RecommendationSourceError> {
    let json = extract_json_object(text).ok_or_else(|| {
        RecommendationSourceError::decode("model answer holds no JSON object")
    })?;
    let dto: PlaceDto = serde_json::from_str(json).map_err(|error| {
        RecommendationSourceError::decode(format!("invalid place JSON: {error}"))
    })?;
    dto.into_domain().map_err(RecommendationSourceError::decode)
}

/// Slice from the first `{` to the last `}`, tolerating prose or code
/// fences around the object.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    raw.get(start..=end)
}
