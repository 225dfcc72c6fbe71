//! Price and distance preferences constraining the next recommendation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown preference string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} preference: {input}")]
pub struct ParsePreferenceError {
    /// Preference family that failed to parse (`price` or `distance`).
    pub kind: &'static str,
    /// The unrecognised input value.
    pub input: String,
}

/// Price preference selected by the user.
///
/// # Examples
/// ```
/// use roulette::domain::PricePref;
///
/// assert_eq!("cheap".parse::<PricePref>(), Ok(PricePref::Cheap));
/// assert_eq!(PricePref::Expensive.as_str(), "expensive");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PricePref {
    /// No price constraint.
    Any,
    /// Budget-friendly places.
    Cheap,
    /// Moderate prices.
    #[default]
    Normal,
    /// High-end or special occasion places.
    Expensive,
}

impl PricePref {
    /// Every price preference in display order.
    pub const ALL: [Self; 4] = [Self::Any, Self::Cheap, Self::Normal, Self::Expensive];

    /// Stable lowercase identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Cheap => "cheap",
            Self::Normal => "normal",
            Self::Expensive => "expensive",
        }
    }
}

impl fmt::Display for PricePref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricePref {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pref| pref.as_str() == s)
            .ok_or_else(|| ParsePreferenceError {
                kind: "price",
                input: s.to_owned(),
            })
    }
}

/// Distance preference selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistancePref {
    /// Any distance, favouring interesting options within 5 km.
    Any,
    /// Walking distance, roughly 1 km.
    #[default]
    Near,
    /// Within about 3 km.
    Normal,
}

impl DistancePref {
    /// Every distance preference in display order.
    pub const ALL: [Self; 3] = [Self::Any, Self::Near, Self::Normal];

    /// Stable lowercase identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Near => "near",
            Self::Normal => "normal",
        }
    }
}

impl fmt::Display for DistancePref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistancePref {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pref| pref.as_str() == s)
            .ok_or_else(|| ParsePreferenceError {
                kind: "distance",
                input: s.to_owned(),
            })
    }
}

/// The price/distance pair sent with each recommendation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    /// Price preference.
    pub price: PricePref,
    /// Distance preference.
    pub distance: DistancePref,
}
