//! Supported display and prompt languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unsupported language tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language tag: {input}")]
pub struct ParseLanguageError {
    /// The unrecognised tag.
    pub input: String,
}

/// Active language for user-facing copy and prompt directives.
///
/// # Examples
/// ```
/// use roulette::domain::Language;
///
/// assert_eq!(Language::default(), Language::Korean);
/// assert_eq!(Language::Korean.toggled(), Language::English);
/// assert_eq!(Language::English.tag(), "en");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// Korean (`ko`).
    #[default]
    #[serde(rename = "ko")]
    Korean,
    /// English (`en`).
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// BCP 47 language tag.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Korean => "ko",
            Self::English => "en",
        }
    }

    /// The other supported language.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Korean => Self::English,
            Self::English => Self::Korean,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Self::Korean),
            "en" => Ok(Self::English),
            _ => Err(ParseLanguageError {
                input: s.to_owned(),
            }),
        }
    }
}
