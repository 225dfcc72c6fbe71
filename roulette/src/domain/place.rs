//! Recommended place record and its display derivations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Image shown when a recommended place has no photo.
pub const PLACEHOLDER_PHOTO_URL: &str = "https://picsum.photos/800/600";

/// Average walking speed used for walk-time estimates, in metres per minute.
pub const WALKING_METRES_PER_MINUTE: f64 = 80.0;

/// Coarse categorical price tier of a recommended place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceBand {
    /// Budget-friendly.
    Cheap,
    /// Moderately priced.
    Normal,
    /// High-end.
    Expensive,
    /// The model could not tell.
    #[default]
    Unknown,
}

impl PriceBand {
    /// Stable lowercase identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cheap => "cheap",
            Self::Normal => "normal",
            Self::Expensive => "expensive",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PriceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceBand {
    type Err = std::convert::Infallible;

    /// Unrecognised values map to [`PriceBand::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "cheap" => Self::Cheap,
            "normal" => Self::Normal,
            "expensive" => Self::Expensive,
            _ => Self::Unknown,
        })
    }
}

/// One restaurant recommendation.
///
/// Produced by the recommendation source from untrusted model output; only
/// the structural checks performed by the adapter apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Opaque identifier suggested by the model.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Main food category.
    pub category: String,
    /// Phone number, when known.
    pub phone: Option<String>,
    /// Where the place is.
    pub location: Coordinates,
    /// Street address.
    pub address: String,
    /// Estimated distance from the user in metres. Never negative.
    pub distance_meters: f64,
    /// Price tier.
    pub price_band: PriceBand,
    /// User rating, when known.
    pub rating: Option<f64>,
    /// Number of reviews behind `rating`, when known.
    pub review_count: Option<u64>,
    /// Photo URL, when known.
    pub photo_url: Option<String>,
    /// Short reason for the recommendation, in the requested language.
    pub reason: String,
}

impl Place {
    /// Photo URL with the placeholder substituted when absent or blank.
    #[must_use]
    pub fn photo_url_or_placeholder(&self) -> &str {
        match self.photo_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_PHOTO_URL,
        }
    }

    /// Fill in the placeholder photo when the model supplied none.
    #[must_use]
    pub fn with_placeholder_photo(mut self) -> Self {
        let missing = self
            .photo_url
            .as_deref()
            .is_none_or(|url| url.trim().is_empty());
        if missing {
            self.photo_url = Some(PLACEHOLDER_PHOTO_URL.to_owned());
        }
        self
    }

    /// Compact distance label: metres below one kilometre, else kilometres.
    ///
    /// # Examples
    /// ```
    /// # use roulette::domain::place::distance_label;
    /// assert_eq!(distance_label(450.0), "450m");
    /// assert_eq!(distance_label(1500.0), "1.5km");
    /// ```
    #[must_use]
    pub fn distance_label(&self) -> String {
        distance_label(self.distance_meters)
    }

    /// Estimated walking time in whole minutes, rounded up.
    #[must_use]
    pub fn walk_minutes(&self) -> u64 {
        walk_minutes(self.distance_meters)
    }

    /// External maps deep link with walking directions to this place.
    #[must_use]
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}",
            self.location.latitude(),
            self.location.longitude()
        )
    }
}

/// Format a distance in metres for display.
#[must_use]
pub fn distance_label(distance_meters: f64) -> String {
    if distance_meters < 1000.0 {
        format!("{distance_meters}m")
    } else {
        format!("{:.1}km", distance_meters / 1000.0)
    }
}

/// Walking minutes for a distance, rounded up.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "clamped non-negative; float-to-int casts saturate"
)]
#[must_use]
pub fn walk_minutes(distance_meters: f64) -> u64 {
    (distance_meters.max(0.0) / WALKING_METRES_PER_MINUTE).ceil() as u64
}
