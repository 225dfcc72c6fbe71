//! Gemini-backed [`AddressSource`].

use std::sync::Arc;

use async_trait::async_trait;

use super::client::{ContentGenerator, GenerationError, GenerationRequest};
use super::prompt::address_prompt;
use crate::domain::ports::{AddressSource, AddressSourceError};
use crate::domain::{Coordinates, Language};

/// Reverse geocoder asking the model for a free-text street address.
pub struct GeminiAddressSource {
    generator: Arc<dyn ContentGenerator>,
}

impl GeminiAddressSource {
    /// Adapter asking `generator` for addresses.
    #[must_use]
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl AddressSource for GeminiAddressSource {
    async fn lookup(
        &self,
        coordinates: &Coordinates,
        language: Language,
    ) -> Result<String, AddressSourceError> {
        let text = self
            .generator
            .generate(&GenerationRequest::text(address_prompt(coordinates, language)))
            .await
            .map_err(|error| match error {
                GenerationError::Transport { .. } => AddressSourceError::transport(error.to_string()),
                _ => AddressSourceError::model(error.to_string()),
            })?;
        let address = text.trim();
        if address.is_empty() {
            return Err(AddressSourceError::empty());
        }
        Ok(address.to_owned())
    }
}
