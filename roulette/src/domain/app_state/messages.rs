//! Typed failure messages rendered into localised copy on demand.
//!
//! Failures are stored as keys rather than text so that a language toggle
//! re-renders an error that is already on screen.

use crate::domain::Translations;
use crate::domain::ports::{LocationError, RecommendationSourceError};

/// Cause-specific suffix appended to the geolocation failure prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFailureKind {
    /// Access to the position was refused.
    PermissionDenied,
    /// No position could be determined.
    PositionUnavailable,
    /// The request timed out.
    Timeout,
    /// Anything else, including a missing capability.
    Unknown,
}

impl From<&LocationError> for LocationFailureKind {
    fn from(error: &LocationError) -> Self {
        match error {
            LocationError::PermissionDenied { .. } => Self::PermissionDenied,
            LocationError::PositionUnavailable { .. } => Self::PositionUnavailable,
            LocationError::Timeout { .. } => Self::Timeout,
            LocationError::Unknown { .. } | LocationError::CapabilityUnavailable => Self::Unknown,
        }
    }
}

/// A user-facing failure, independent of the active language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureMessage {
    /// Location acquisition failed; rendered as prefix plus suffix.
    Location(LocationFailureKind),
    /// A recommendation was requested before any position was known.
    MissingCoordinates,
    /// The recommendation service failed; the user should try again.
    ServiceBusy,
    /// A failure carrying its own text.
    Custom(String),
    /// Nothing more specific is known.
    Unknown,
}

impl FailureMessage {
    /// Message for a failed location request.
    #[must_use]
    pub fn from_location_error(error: &LocationError) -> Self {
        Self::Location(LocationFailureKind::from(error))
    }

    /// Message for a failed recommendation: the service failure kinds share
    /// one canned message, anything else shows its own text when it has any.
    #[must_use]
    pub fn from_recommendation_error(error: &RecommendationSourceError) -> Self {
        if error.is_service_failure() {
            return Self::ServiceBusy;
        }
        match error {
            RecommendationSourceError::Unexpected { message } if !message.trim().is_empty() => {
                Self::Custom(message.clone())
            }
            _ => Self::Unknown,
        }
    }

    /// Render in the language of `texts`.
    ///
    /// # Examples
    /// ```
    /// use roulette::domain::{FailureMessage, Language, Translations};
    /// use roulette::domain::app_state::LocationFailureKind;
    ///
    /// let texts = Translations::for_language(Language::English);
    /// let message = FailureMessage::Location(LocationFailureKind::Timeout);
    /// assert_eq!(
    ///     message.render(texts),
    ///     "Could not get location information. The request timed out."
    /// );
    /// ```
    #[must_use]
    pub fn render(&self, texts: &Translations) -> String {
        match self {
            Self::Location(kind) => {
                let errors = &texts.app.geolocation_errors;
                let suffix = match kind {
                    LocationFailureKind::PermissionDenied => errors.permission_denied,
                    LocationFailureKind::PositionUnavailable => errors.position_unavailable,
                    LocationFailureKind::Timeout => errors.timeout,
                    LocationFailureKind::Unknown => errors.unknown,
                };
                format!("{}{suffix}", errors.prefix)
            }
            Self::MissingCoordinates => texts.app.recommendation_error.to_owned(),
            Self::ServiceBusy => texts.app.service_busy.to_owned(),
            Self::Custom(message) => message.clone(),
            Self::Unknown => texts.app.unknown_error.to_owned(),
        }
    }
}
