//! Scripted port implementations for driving the orchestrator end to end.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use roulette::domain::ports::{
    LinkOpener, LinkOpenerError, LocationError, LocationProvider, LocationRequestOptions,
    RecommendationRequest, RecommendationSource, RecommendationSourceError,
};
use roulette::domain::{Coordinates, Place, PriceBand};
use roulette::outbound::gemini::{ContentGenerator, GenerationError, GenerationRequest};
use tokio::sync::oneshot;

pub fn coordinates(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates::new(latitude, longitude).expect("valid coordinates")
}

struct Step {
    gate: Option<oneshot::Receiver<()>>,
    result: Result<Coordinates, LocationError>,
}

/// Location provider answering from a queue, one entry per request.
#[derive(Default)]
pub struct ScriptedLocation {
    steps: Mutex<VecDeque<Step>>,
}

impl ScriptedLocation {
    pub fn push(&self, result: Result<Coordinates, LocationError>) {
        self.steps
            .lock()
            .expect("location script lock")
            .push_back(Step { gate: None, result });
    }

    /// Queue a result that is held back until the returned sender fires.
    pub fn push_gated(&self, result: Result<Coordinates, LocationError>) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.steps
            .lock()
            .expect("location script lock")
            .push_back(Step {
                gate: Some(gate),
                result,
            });
        release
    }
}

#[async_trait]
impl LocationProvider for ScriptedLocation {
    async fn request(
        &self,
        _options: &LocationRequestOptions,
    ) -> Result<Coordinates, LocationError> {
        let step = self.steps.lock().expect("location script lock").pop_front();
        let Some(Step { gate, result }) = step else {
            return Err(LocationError::position_unavailable("script exhausted"));
        };
        if let Some(gate) = gate {
            gate.await.expect("gate released");
        }
        result
    }
}

/// Model stand-in: free-text prompts get the address, JSON prompts pop the
/// next scripted answer.
pub struct StubGenerator {
    address: String,
    answers: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_owned(),
            answers: Mutex::default(),
            prompts: Mutex::default(),
        }
    }

    pub fn push_answer(&self, answer: Result<String, GenerationError>) {
        self.answers
            .lock()
            .expect("answer lock")
            .push_back(answer);
    }

    /// Prompts of every structured request seen so far.
    pub fn recommendation_prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt lock").clone()
    }
}

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        if request.response_schema.is_none() {
            return Ok(self.address.clone());
        }
        self.prompts
            .lock()
            .expect("prompt lock")
            .push(request.prompt.clone());
        self.answers
            .lock()
            .expect("answer lock")
            .pop_front()
            .unwrap_or(Err(GenerationError::NoCandidates))
    }
}

/// Recommendation source returning "Place 1", "Place 2", ... and keeping
/// every request.
#[derive(Default)]
pub struct NumberedRecommendations {
    requests: Mutex<Vec<RecommendationRequest>>,
}

impl NumberedRecommendations {
    pub fn requests(&self) -> Vec<RecommendationRequest> {
        self.requests.lock().expect("request lock").clone()
    }
}

#[async_trait]
impl RecommendationSource for NumberedRecommendations {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Place, RecommendationSourceError> {
        let mut requests = self.requests.lock().expect("request lock");
        requests.push(request.clone());
        let name = format!("Place {}", requests.len());
        Ok(Place {
            id: name.to_lowercase(),
            name,
            category: "Noodles".to_owned(),
            phone: None,
            location: request.coordinates,
            address: "2 Gangnam-daero".to_owned(),
            distance_meters: 200.0,
            price_band: PriceBand::Cheap,
            rating: None,
            review_count: None,
            photo_url: None,
            reason: "Quick and warm".to_owned(),
        })
    }
}

/// Link opener remembering every URL it was handed.
#[derive(Default)]
pub struct RecordingLinks {
    urls: Mutex<Vec<String>>,
}

impl RecordingLinks {
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().expect("link lock").clone()
    }
}

impl LinkOpener for RecordingLinks {
    fn open(&self, url: &str) -> Result<(), LinkOpenerError> {
        self.urls.lock().expect("link lock").push(url.to_owned());
        Ok(())
    }
}
