//! Wire DTOs for the Gemini `generateContent` endpoint and the place payload.
//!
//! Transport shapes are decoded here first and mapped into domain records in
//! one pass, so serde details never leak past this module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::GenerationError;
use crate::domain::{Coordinates, Place, PriceBand};

const FINISH_REASON_STOP: &str = "STOP";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentRequestDto<'a> {
    pub(super) contents: Vec<ContentDto<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) generation_config: Option<GenerationConfigDto<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct ContentDto<'a> {
    pub(super) role: &'a str,
    pub(super) parts: Vec<PartDto<'a>>,
}

#[derive(Debug, Serialize)]
pub(super) struct PartDto<'a> {
    pub(super) text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerationConfigDto<'a> {
    pub(super) response_mime_type: &'a str,
    pub(super) response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateContentResponseDto {
    #[serde(default)]
    candidates: Vec<CandidateDto>,
    prompt_feedback: Option<PromptFeedbackDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidateDto {
    content: Option<CandidateContentDto>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContentDto {
    #[serde(default)]
    parts: Vec<ResponsePartDto>,
}

#[derive(Debug, Deserialize)]
struct ResponsePartDto {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedbackDto {
    block_reason: Option<String>,
}

impl GenerateContentResponseDto {
    /// Concatenated text of the first candidate.
    pub(super) fn into_text(self) -> Result<String, GenerationError> {
        if let Some(reason) = self.prompt_feedback.and_then(|feedback| feedback.block_reason) {
            return Err(GenerationError::Blocked { reason });
        }
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(GenerationError::NoCandidates)?;
        let text: String = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        match candidate.finish_reason {
            Some(reason) if text.is_empty() && reason != FINISH_REASON_STOP => {
                Err(GenerationError::Blocked { reason })
            }
            _ => Ok(text),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PlaceDto {
    id: String,
    name: String,
    category: String,
    #[serde(default)]
    phone: Option<String>,
    location: LocationDto,
    address: String,
    distance_meters: f64,
    price_band: String,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    review_count: Option<f64>,
    #[serde(default)]
    photo_url: Option<String>,
    reason: String,
}

#[derive(Debug, Deserialize)]
struct LocationDto {
    latitude: f64,
    longitude: f64,
}

impl PlaceDto {
    pub(super) fn into_domain(self) -> Result<Place, String> {
        if self.name.trim().is_empty() {
            return Err("place name is blank".to_owned());
        }
        let location = Coordinates::new(self.location.latitude, self.location.longitude)
            .map_err(|error| format!("place location is invalid: {error}"))?;
        let distance_meters = non_negative("distanceMeters", self.distance_meters)?;
        let rating = self
            .rating
            .map(|rating| non_negative("rating", rating))
            .transpose()?;
        let review_count = self
            .review_count
            .map(|count| non_negative("reviewCount", count).map(whole_count))
            .transpose()?;
        let price_band = self.price_band.parse::<PriceBand>().unwrap_or_default();

        Ok(Place {
            id: self.id,
            name: self.name,
            category: self.category,
            phone: self.phone.filter(|phone| !phone.trim().is_empty()),
            location,
            address: self.address,
            distance_meters,
            price_band,
            rating,
            review_count,
            photo_url: self.photo_url,
            reason: self.reason,
        }
        .with_placeholder_photo())
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64, String> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("{field} must be a finite, non-negative number, got {value}"))
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "review counts are validated as finite and non-negative"
)]
fn whole_count(value: f64) -> u64 {
    value.round() as u64
}
