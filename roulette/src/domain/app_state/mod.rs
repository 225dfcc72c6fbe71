//! Pure recommendation state machine.
//!
//! [`AppState`] owns every piece of application state and changes only in
//! response to an [`Intent`] from the user or a [`Completion`] from an
//! adapter. Each transition returns the [`Effect`]s the caller must run;
//! their results come back later as completions tagged with the
//! [`RequestTicket`] they were issued under. A completion whose ticket is no
//! longer current is discarded, so the most recent request of each kind
//! always wins.

mod messages;
mod view;

#[cfg(test)]
mod tests;

use std::fmt;

use tracing::{debug, info, warn};

pub use self::messages::{FailureMessage, LocationFailureKind};
pub use self::view::{AddressPanel, AppView, FilterPanel, LocationPanel, PlaceCard, Screen};
use crate::domain::ports::{
    AddressSourceError, LocationError, LocationRequestOptions, RecommendationRequest,
    RecommendationSourceError,
};
use crate::domain::{
    Coordinates, DistancePref, Filters, Language, Place, PricePref, RecentPlaces,
    RequestSequence, RequestTicket,
};

/// Lifecycle states of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppStatus {
    /// Waiting for the user to consent to a location request.
    PromptingPermission,
    /// The first location request is outstanding.
    AcquiringLocation,
    /// Position known; filters editable.
    Ready,
    /// A recommendation request is outstanding.
    Recommending,
    /// A place is on screen.
    ShowingResult,
    /// A fatal error is on screen.
    Failed,
}

impl AppStatus {
    /// Stable lowercase name used in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PromptingPermission => "prompting_permission",
            Self::AcquiringLocation => "acquiring_location",
            Self::Ready => "ready",
            Self::Recommending => "recommending",
            Self::ShowingResult => "showing_result",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for AppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Consent to the first location request.
    GrantPermission,
    /// Change the price filter.
    SetPrice(PricePref),
    /// Change the distance filter.
    SetDistance(DistancePref),
    /// Ask for a recommendation.
    Recommend,
    /// Ask for a different recommendation.
    Reroll,
    /// Re-acquire the position without leaving the current screen.
    Relocate,
    /// Start over after a fatal error.
    Retry,
    /// Leave the result or error screen.
    GoHome,
    /// Switch between Korean and English.
    ToggleLanguage,
    /// Open walking directions to the current place.
    OpenDirections,
}

/// Result of an effect, tagged with the ticket it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// A location request finished.
    Location {
        /// Ticket of the originating request.
        ticket: RequestTicket,
        /// Position or failure.
        result: Result<Coordinates, LocationError>,
    },
    /// An address lookup finished.
    Address {
        /// Ticket of the originating request.
        ticket: RequestTicket,
        /// Street address or failure.
        result: Result<String, AddressSourceError>,
    },
    /// A recommendation request finished.
    Recommendation {
        /// Ticket of the originating request.
        ticket: RequestTicket,
        /// Place or failure.
        result: Result<Place, RecommendationSourceError>,
    },
}

/// Work requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Acquire the current position.
    RequestLocation {
        /// Ticket the completion must carry.
        ticket: RequestTicket,
        /// Accuracy, timeout and cache age.
        options: LocationRequestOptions,
    },
    /// Resolve the street address of `coordinates`.
    FetchAddress {
        /// Ticket the completion must carry.
        ticket: RequestTicket,
        /// Position to resolve.
        coordinates: Coordinates,
        /// Language of the answer.
        language: Language,
    },
    /// Fetch one recommendation.
    FetchRecommendation {
        /// Ticket the completion must carry.
        ticket: RequestTicket,
        /// Position, filters, exclusions and language.
        request: RecommendationRequest,
    },
    /// Open `url` externally; no completion follows.
    OpenLink {
        /// Link to open.
        url: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
struct LocationSubState {
    loading: bool,
    error: Option<FailureMessage>,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct AddressSubState {
    loading: bool,
    resolved: Option<String>,
    failed: bool,
}

/// Single owner of application state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    status: AppStatus,
    language: Language,
    filters: Filters,
    coordinates: Option<Coordinates>,
    location: LocationSubState,
    address: AddressSubState,
    current_place: Option<Place>,
    recent: RecentPlaces,
    failure: Option<FailureMessage>,
    location_requests: RequestSequence,
    address_requests: RequestSequence,
    recommendation_requests: RequestSequence,
}

impl AppState {
    /// State that acquires the position as soon as it is started.
    #[must_use]
    pub fn new(language: Language, filters: Filters) -> Self {
        Self::with_status(AppStatus::AcquiringLocation, language, filters)
    }

    /// State that waits for [`Intent::GrantPermission`] before asking for
    /// the position.
    #[must_use]
    pub fn awaiting_permission(language: Language, filters: Filters) -> Self {
        Self::with_status(AppStatus::PromptingPermission, language, filters)
    }

    fn with_status(status: AppStatus, language: Language, filters: Filters) -> Self {
        Self {
            status,
            language,
            filters,
            coordinates: None,
            location: LocationSubState::default(),
            address: AddressSubState::default(),
            current_place: None,
            recent: RecentPlaces::default(),
            failure: None,
            location_requests: RequestSequence::default(),
            address_requests: RequestSequence::default(),
            recommendation_requests: RequestSequence::default(),
        }
    }

    /// Effects to run on startup: the first location request unless consent
    /// is still pending.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.status != AppStatus::AcquiringLocation || self.location.loading {
            return Vec::new();
        }
        vec![self.request_location()]
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> AppStatus {
        self.status
    }

    /// Active display language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Filters that the next request will carry.
    #[must_use]
    pub fn filters(&self) -> Filters {
        self.filters
    }

    /// Last acquired position.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Place on screen, present only while showing a result.
    #[must_use]
    pub fn current_place(&self) -> Option<&Place> {
        self.current_place.as_ref()
    }

    /// Places recommended so far, newest first.
    #[must_use]
    pub fn recent_places(&self) -> &RecentPlaces {
        &self.recent
    }

    /// Reason for the failure screen, if failed.
    #[must_use]
    pub fn failure(&self) -> Option<&FailureMessage> {
        self.failure.as_ref()
    }

    /// Apply a user action. Actions the current status does not accept are
    /// ignored.
    pub fn handle_intent(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::GrantPermission => self.grant_permission(),
            Intent::SetPrice(price) => self.update_filters(intent, |filters| filters.price = price),
            Intent::SetDistance(distance) => {
                self.update_filters(intent, |filters| filters.distance = distance)
            }
            Intent::Recommend => self.recommend(intent, AppStatus::Ready),
            Intent::Reroll => self.recommend(intent, AppStatus::ShowingResult),
            Intent::Relocate => self.relocate(),
            Intent::Retry => self.retry(),
            Intent::GoHome => self.go_home(),
            Intent::ToggleLanguage => {
                self.language = self.language.toggled();
                info!(language = self.language.tag(), "display language changed");
                Vec::new()
            }
            Intent::OpenDirections => self.open_directions(),
        }
    }

    /// Apply an adapter result. Results from superseded requests are
    /// discarded.
    pub fn handle_completion(&mut self, completion: Completion) -> Vec<Effect> {
        match completion {
            Completion::Location { ticket, result } => self.on_location(ticket, result),
            Completion::Address { ticket, result } => {
                self.on_address(ticket, result);
                Vec::new()
            }
            Completion::Recommendation { ticket, result } => {
                self.on_recommendation(ticket, result);
                Vec::new()
            }
        }
    }

    fn transition(&mut self, next: AppStatus) {
        if self.status != next {
            info!(from = %self.status, to = %next, "status changed");
            self.status = next;
        }
    }

    fn ignore(&self, intent: Intent) -> Vec<Effect> {
        debug!(?intent, status = %self.status, "intent not accepted in this status");
        Vec::new()
    }

    fn request_location(&mut self) -> Effect {
        self.location.loading = true;
        let ticket = self.location_requests.issue();
        debug!(%ticket, "requesting location");
        Effect::RequestLocation {
            ticket,
            options: LocationRequestOptions::default(),
        }
    }

    fn request_address(&mut self, coordinates: Coordinates) -> Effect {
        self.address = AddressSubState {
            loading: true,
            ..AddressSubState::default()
        };
        let ticket = self.address_requests.issue();
        debug!(%ticket, %coordinates, "requesting address");
        Effect::FetchAddress {
            ticket,
            coordinates,
            language: self.language,
        }
    }

    fn grant_permission(&mut self) -> Vec<Effect> {
        if self.status != AppStatus::PromptingPermission {
            return self.ignore(Intent::GrantPermission);
        }
        self.location.error = None;
        self.transition(AppStatus::AcquiringLocation);
        vec![self.request_location()]
    }

    fn update_filters(&mut self, intent: Intent, apply: impl FnOnce(&mut Filters)) -> Vec<Effect> {
        if self.status != AppStatus::Ready {
            return self.ignore(intent);
        }
        apply(&mut self.filters);
        debug!(price = %self.filters.price, distance = %self.filters.distance, "filters changed");
        Vec::new()
    }

    fn recommend(&mut self, intent: Intent, accepted_in: AppStatus) -> Vec<Effect> {
        if self.status != accepted_in {
            return self.ignore(intent);
        }
        let Some(coordinates) = self.coordinates else {
            warn!("recommendation requested without a known position");
            self.current_place = None;
            self.failure = Some(FailureMessage::MissingCoordinates);
            self.transition(AppStatus::Failed);
            return Vec::new();
        };
        self.current_place = None;
        self.failure = None;
        self.transition(AppStatus::Recommending);
        let ticket = self.recommendation_requests.issue();
        debug!(%ticket, excluded = self.recent.len(), "requesting recommendation");
        vec![Effect::FetchRecommendation {
            ticket,
            request: RecommendationRequest {
                coordinates,
                filters: self.filters,
                exclude_names: self.recent.exclusion_names(),
                language: self.language,
            },
        }]
    }

    fn relocate(&mut self) -> Vec<Effect> {
        self.location.error = None;
        self.address = AddressSubState::default();
        self.address_requests.supersede();
        vec![self.request_location()]
    }

    fn retry(&mut self) -> Vec<Effect> {
        if self.status != AppStatus::Failed {
            return self.ignore(Intent::Retry);
        }
        self.failure = None;
        self.location.error = None;
        self.transition(AppStatus::AcquiringLocation);
        vec![self.request_location()]
    }

    fn go_home(&mut self) -> Vec<Effect> {
        if !matches!(self.status, AppStatus::ShowingResult | AppStatus::Failed) {
            return self.ignore(Intent::GoHome);
        }
        self.current_place = None;
        self.failure = None;
        self.transition(AppStatus::Ready);
        Vec::new()
    }

    fn open_directions(&self) -> Vec<Effect> {
        match (&self.status, &self.current_place) {
            (AppStatus::ShowingResult, Some(place)) => vec![Effect::OpenLink {
                url: place.directions_url(),
            }],
            _ => self.ignore(Intent::OpenDirections),
        }
    }

    fn on_location(
        &mut self,
        ticket: RequestTicket,
        result: Result<Coordinates, LocationError>,
    ) -> Vec<Effect> {
        if !self.location_requests.is_current(ticket) {
            debug!(%ticket, "discarding superseded location result");
            return Vec::new();
        }
        self.location.loading = false;
        match result {
            Ok(coordinates) => {
                info!(%coordinates, "location acquired");
                self.coordinates = Some(coordinates);
                self.location.error = None;
                if self.status == AppStatus::AcquiringLocation {
                    self.transition(AppStatus::Ready);
                }
                vec![self.request_address(coordinates)]
            }
            Err(error) => {
                warn!(kind = error.kind(), %error, "location request failed");
                let message = FailureMessage::from_location_error(&error);
                if self.status == AppStatus::AcquiringLocation {
                    self.failure = Some(message);
                    self.transition(AppStatus::Failed);
                } else {
                    self.location.error = Some(message);
                }
                Vec::new()
            }
        }
    }

    fn on_address(&mut self, ticket: RequestTicket, result: Result<String, AddressSourceError>) {
        if !self.address_requests.is_current(ticket) {
            debug!(%ticket, "discarding superseded address result");
            return;
        }
        self.address.loading = false;
        match result {
            Ok(address) => {
                self.address.resolved = Some(address);
                self.address.failed = false;
            }
            Err(error) => {
                warn!(kind = error.kind(), %error, "address lookup failed");
                self.address.resolved = None;
                self.address.failed = true;
            }
        }
    }

    fn on_recommendation(
        &mut self,
        ticket: RequestTicket,
        result: Result<Place, RecommendationSourceError>,
    ) {
        if !self.recommendation_requests.is_current(ticket) || self.status != AppStatus::Recommending
        {
            debug!(%ticket, status = %self.status, "discarding superseded recommendation");
            return;
        }
        match result {
            Ok(place) => {
                info!(name = %place.name, category = %place.category, "recommendation received");
                self.recent.record(place.clone());
                self.current_place = Some(place);
                self.transition(AppStatus::ShowingResult);
            }
            Err(error) => {
                warn!(kind = error.kind(), %error, "recommendation failed");
                self.failure = Some(FailureMessage::from_recommendation_error(&error));
                self.transition(AppStatus::Failed);
            }
        }
    }
}
