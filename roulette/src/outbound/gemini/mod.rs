//! Gemini outbound adapters.
//!
//! One [`GeminiClient`] is built at startup and shared, behind the
//! [`ContentGenerator`] seam, by the recommendation and address adapters.

mod address;
mod client;
mod dto;
mod prompt;
mod recommendation;
mod schema;

pub use address::GeminiAddressSource;
#[cfg(test)]
pub use client::MockContentGenerator;
pub use client::{
    ContentGenerator, GeminiClient, GeminiClientBuildError, GenerationError, GenerationRequest,
};
pub use recommendation::GeminiRecommendationSource;
