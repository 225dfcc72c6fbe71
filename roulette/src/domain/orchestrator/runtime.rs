//! Port bundle and the tasks that turn effects into completions.
//!
//! Every task yields exactly one [`Completion`]: adapter errors, panics, and
//! location timeouts are all folded into the completion's error variant.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;

use crate::domain::ports::{
    AddressSource, AddressSourceError, LinkOpener, LocationError, LocationProvider,
    LocationRequestOptions, RecommendationRequest, RecommendationSource,
    RecommendationSourceError,
};
use crate::domain::{Completion, Coordinates, Language, RequestTicket};

/// Port bundle required by the orchestrator.
#[derive(Clone)]
pub struct RoulettePorts {
    /// Position capability.
    pub location: Arc<dyn LocationProvider>,
    /// Recommendation source.
    pub recommendations: Arc<dyn RecommendationSource>,
    /// Reverse geocoder.
    pub addresses: Arc<dyn AddressSource>,
    /// External link opener.
    pub links: Arc<dyn LinkOpener>,
}

impl RoulettePorts {
    /// Build a strongly-typed port bundle.
    pub fn new(
        location: Arc<dyn LocationProvider>,
        recommendations: Arc<dyn RecommendationSource>,
        addresses: Arc<dyn AddressSource>,
        links: Arc<dyn LinkOpener>,
    ) -> Self {
        Self {
            location,
            recommendations,
            addresses,
            links,
        }
    }
}

pub(super) async fn locate(
    provider: Arc<dyn LocationProvider>,
    ticket: RequestTicket,
    options: LocationRequestOptions,
) -> Completion {
    let request = AssertUnwindSafe(provider.request(&options)).catch_unwind();
    let result = match tokio::time::timeout(options.timeout, request).await {
        Ok(Ok(result)) => result,
        Ok(Err(panic)) => Err(LocationError::unknown(panic_message(panic.as_ref()))),
        Err(_) => Err(LocationError::timeout(format!(
            "no position within {} ms",
            options.timeout.as_millis()
        ))),
    };
    Completion::Location { ticket, result }
}

pub(super) async fn resolve_address(
    source: Arc<dyn AddressSource>,
    ticket: RequestTicket,
    coordinates: Coordinates,
    language: Language,
) -> Completion {
    let result = AssertUnwindSafe(source.lookup(&coordinates, language))
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| Err(AddressSourceError::model(panic_message(panic.as_ref()))));
    Completion::Address { ticket, result }
}

pub(super) async fn recommend(
    source: Arc<dyn RecommendationSource>,
    ticket: RequestTicket,
    request: RecommendationRequest,
) -> Completion {
    let result = AssertUnwindSafe(source.recommend(&request))
        .catch_unwind()
        .await
        .unwrap_or_else(|panic| {
            Err(RecommendationSourceError::unexpected(panic_message(
                panic.as_ref(),
            )))
        });
    Completion::Recommendation { ticket, result }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_default()
}
