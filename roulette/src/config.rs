//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ROULETTE_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence. Raw values are
//! kept as loaded; the accessors below apply defaults and parse them.

use std::fmt;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::{
    Coordinates, CoordinatesValidationError, Language, ParseLanguageError,
};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/";
const DEFAULT_LOCATION_ENDPOINT: &str = "http://ip-api.com/json/";

/// Invalid settings detected at startup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// No API key and offline mode is off.
    #[error("an API key is required unless offline mode is enabled (set ROULETTE_API_KEY)")]
    MissingApiKey,
    /// Only one half of the fixed position was given.
    #[error("latitude and longitude must be configured together")]
    PartialLocation,
    /// The fixed position is out of range.
    #[error("configured location is invalid: {0}")]
    InvalidLocation(#[from] CoordinatesValidationError),
    /// The language tag is not supported.
    #[error(transparent)]
    InvalidLanguage(#[from] ParseLanguageError),
    /// A URL setting does not parse.
    #[error("invalid {field} URL: {source}")]
    InvalidUrl {
        /// Setting that holds the URL.
        field: &'static str,
        /// Parser failure.
        source: url::ParseError,
    },
}

/// Settings for one run of the application.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROULETTE")]
pub struct RouletteSettings {
    /// Gemini API key. Required unless `offline` is set.
    pub api_key: Option<String>,
    /// Model name.
    pub model: Option<String>,
    /// Base URL of the Gemini REST API.
    pub endpoint: Option<String>,
    /// Per-call timeout for model requests. Unbounded when absent.
    pub model_timeout_secs: Option<u64>,
    /// Initial display language tag (`ko` or `en`).
    pub language: Option<String>,
    /// Fixed latitude; replaces IP geolocation when set with `longitude`.
    pub latitude: Option<f64>,
    /// Fixed longitude; replaces IP geolocation when set with `latitude`.
    pub longitude: Option<f64>,
    /// IP geolocation endpoint.
    pub location_endpoint: Option<String>,
    /// Use canned sources and a fixed position instead of the network.
    #[ortho_config(default = false)]
    pub offline: bool,
    /// Ask for consent before the first location request.
    #[ortho_config(default = false)]
    pub ask_permission: bool,
}

impl fmt::Debug for RouletteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouletteSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("model_timeout_secs", &self.model_timeout_secs)
            .field("language", &self.language)
            .field("latitude", &self.latitude)
            .field("longitude", &self.longitude)
            .field("location_endpoint", &self.location_endpoint)
            .field("offline", &self.offline)
            .field("ask_permission", &self.ask_permission)
            .finish()
    }
}

impl RouletteSettings {
    /// Check every setting at once.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.offline && self.api_key().is_none() {
            return Err(ConfigError::MissingApiKey);
        }
        self.language()?;
        self.static_location()?;
        self.endpoint()?;
        self.location_endpoint()?;
        Ok(())
    }

    /// API key with surrounding whitespace removed; blank counts as absent.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Return the configured model, falling back to the default.
    #[must_use]
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Gemini base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] when the value does not parse.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        parse_url("endpoint", self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    }

    /// IP geolocation URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] when the value does not parse.
    pub fn location_endpoint(&self) -> Result<Url, ConfigError> {
        parse_url(
            "location endpoint",
            self.location_endpoint
                .as_deref()
                .unwrap_or(DEFAULT_LOCATION_ENDPOINT),
        )
    }

    /// Per-call model timeout; `None` leaves calls unbounded.
    #[must_use]
    pub fn model_timeout(&self) -> Option<Duration> {
        self.model_timeout_secs.map(Duration::from_secs)
    }

    /// Initial language, Korean unless configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLanguage`] for unsupported tags.
    pub fn language(&self) -> Result<Language, ConfigError> {
        self.language
            .as_deref()
            .map_or(Ok(Language::default()), str::parse)
            .map_err(ConfigError::from)
    }

    /// Fixed position, when both halves are configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PartialLocation`] when only one half is set and
    /// [`ConfigError::InvalidLocation`] when the pair is out of range.
    pub fn static_location(&self) -> Result<Option<Coordinates>, ConfigError> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Some(Coordinates::new(latitude, longitude)?)),
            (None, None) => Ok(None),
            _ => Err(ConfigError::PartialLocation),
        }
    }
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|source| ConfigError::InvalidUrl { field, source })
}
