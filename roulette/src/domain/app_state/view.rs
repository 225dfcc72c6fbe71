//! Read-only projection of [`AppState`] with every string already rendered.
//!
//! Presentation code only formats what it finds here, so two views compare
//! equal exactly when the user would see the same screen.

use std::slice;

use super::{AppState, AppStatus};
use crate::domain::{Coordinates, DistancePref, Filters, Language, Place, PricePref, Translations};

/// Everything a presentation layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AppView {
    /// Current lifecycle state.
    pub status: AppStatus,
    /// Active display language.
    pub language: Language,
    /// Heading line.
    pub title: &'static str,
    /// Line under the heading.
    pub subtitle: &'static str,
    /// Label of the language switch.
    pub language_toggle: &'static str,
    /// Number of places remembered for exclusion.
    pub recent_count: usize,
    /// Status-specific body.
    pub screen: Screen,
}

/// Body of the frame, one variant per visible screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Consent prompt shown before the first location request.
    PermissionPrompt {
        /// Prompt heading.
        title: &'static str,
        /// Why the position is needed.
        description: &'static str,
        /// Label of the consent control.
        button: &'static str,
    },
    /// Loader with phrases to cycle through.
    Loading {
        /// Phrases in display order. A new slice restarts the cycle.
        phrases: &'static [&'static str],
    },
    /// Position known; filters editable.
    Ready {
        /// Address, coordinates and inline warnings.
        location: LocationPanel,
        /// Price and distance options.
        filters: FilterPanel,
        /// Label of the recommend control.
        recommend_button: &'static str,
    },
    /// The current pick.
    Result(Box<PlaceCard>),
    /// Fatal error with recovery actions.
    Failed {
        /// Screen heading.
        title: &'static str,
        /// What went wrong, in the active language.
        message: String,
        /// Label of the retry control.
        retry: &'static str,
        /// Label of the go-home control.
        home: &'static str,
    },
    /// Nothing to show.
    Empty,
}

/// Address line shown above the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressPanel {
    /// A lookup is outstanding.
    Fetching(&'static str),
    /// The resolved street address.
    Resolved(String),
    /// A new position is being acquired and no address is known.
    Relocating(&'static str),
    /// No address and nothing in flight.
    Unknown,
}

impl AddressPanel {
    /// Text to print for the address line.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Fetching(text) | Self::Relocating(text) => text,
            Self::Resolved(address) => address,
            Self::Unknown => "...",
        }
    }
}

/// Location block of the ready screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPanel {
    /// "Current address" heading.
    pub heading: &'static str,
    /// Address or placeholder.
    pub address: AddressPanel,
    /// Known coordinates, if any.
    pub coordinates: Option<Coordinates>,
    /// Label of the relocate control; switches while relocating.
    pub relocate_label: &'static str,
    /// Whether a location request is outstanding.
    pub relocating: bool,
    /// Inline warning for a failed relocation or address lookup.
    pub banner: Option<String>,
}

/// Filter block of the ready screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanel {
    /// Heading of the price options.
    pub price_heading: &'static str,
    /// Heading of the distance options.
    pub distance_heading: &'static str,
    /// Options with their labels; the selected one is `selected.price`.
    pub price_options: Vec<(PricePref, &'static str)>,
    /// Options with their labels; the selected one is `selected.distance`.
    pub distance_options: Vec<(DistancePref, &'static str)>,
    /// Filters currently in effect.
    pub selected: Filters,
}

/// Rendered recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCard {
    /// Place name.
    pub name: String,
    /// Main food category.
    pub category: String,
    /// Why the model picked it.
    pub reason: String,
    /// Street address.
    pub address: String,
    /// Phone number, when known.
    pub phone: Option<String>,
    /// Photo URL, the placeholder when the model gave none.
    pub photo_url: String,
    /// "Approx. 350m / 5 min walk" in the active language.
    pub walk_distance: String,
    /// Localised price band.
    pub price_label: &'static str,
    /// "4.2 (128)" or "4.2" when only the rating is known.
    pub rating: Option<String>,
    /// Walking directions deep link.
    pub directions_url: String,
    /// Label of the go-home control.
    pub home_label: &'static str,
    /// Label of the reroll control.
    pub reroll_label: &'static str,
    /// Label of the directions control.
    pub directions_label: &'static str,
}

impl PlaceCard {
    fn render(place: &Place, texts: &'static Translations) -> Self {
        let card = &texts.recommendation_card;
        let rating = place.rating.map(|rating| {
            place.review_count.map_or_else(
                || format!("{rating:.1}"),
                |count| format!("{rating:.1} ({count})"),
            )
        });
        Self {
            name: place.name.clone(),
            category: place.category.clone(),
            reason: place.reason.clone(),
            address: place.address.clone(),
            phone: place.phone.clone(),
            photo_url: place.photo_url_or_placeholder().to_owned(),
            walk_distance: card.walk_distance(&place.distance_label(), place.walk_minutes()),
            price_label: card.price_band(place.price_band),
            rating,
            directions_url: place.directions_url(),
            home_label: card.home,
            reroll_label: card.reroll,
            directions_label: card.directions,
        }
    }
}

impl AppState {
    /// Project the state into localised display data.
    #[must_use]
    pub fn view(&self) -> AppView {
        let texts = Translations::for_language(self.language);
        AppView {
            status: self.status,
            language: self.language,
            title: texts.header.title,
            subtitle: texts.header.subtitle,
            language_toggle: texts.language_toggle,
            recent_count: self.recent.len(),
            screen: self.screen(texts),
        }
    }

    fn screen(&self, texts: &'static Translations) -> Screen {
        match self.status {
            AppStatus::PromptingPermission => Screen::PermissionPrompt {
                title: texts.permission_prompt.title,
                description: texts.permission_prompt.description,
                button: texts.permission_prompt.button,
            },
            AppStatus::AcquiringLocation => Screen::Loading {
                phrases: slice::from_ref(&texts.permission_prompt.loading),
            },
            AppStatus::Recommending => Screen::Loading {
                phrases: &texts.loader,
            },
            AppStatus::Ready => Screen::Ready {
                location: self.location_panel(texts),
                filters: filter_panel(self.filters, texts),
                recommend_button: texts.app.recommend_button,
            },
            AppStatus::ShowingResult => self.current_place.as_ref().map_or(Screen::Empty, |place| {
                Screen::Result(Box::new(PlaceCard::render(place, texts)))
            }),
            AppStatus::Failed => Screen::Failed {
                title: texts.error_display.title,
                message: self
                    .failure
                    .as_ref()
                    .map_or_else(|| texts.app.unknown_error.to_owned(), |f| f.render(texts)),
                retry: texts.error_display.retry,
                home: texts.error_display.home,
            },
        }
    }

    fn location_panel(&self, texts: &'static Translations) -> LocationPanel {
        let display = &texts.location_display;
        let address = if self.address.loading {
            AddressPanel::Fetching(display.fetching_address)
        } else if let Some(address) = &self.address.resolved {
            AddressPanel::Resolved(address.clone())
        } else if self.location.loading {
            AddressPanel::Relocating(display.relocating_button)
        } else {
            AddressPanel::Unknown
        };
        let banner = match &self.location.error {
            Some(failure) => Some(failure.render(texts)),
            None if self.address.failed => Some(display.address_error.to_owned()),
            None => None,
        };
        LocationPanel {
            heading: display.current_address,
            address,
            coordinates: self.coordinates,
            relocate_label: if self.location.loading {
                display.relocating_button
            } else {
                display.relocate_button
            },
            relocating: self.location.loading,
            banner,
        }
    }
}

fn filter_panel(selected: Filters, texts: &'static Translations) -> FilterPanel {
    let filters = &texts.filters;
    FilterPanel {
        price_heading: filters.price,
        distance_heading: filters.distance,
        price_options: PricePref::ALL
            .into_iter()
            .map(|pref| (pref, filters.price_option(pref)))
            .collect(),
        distance_options: DistancePref::ALL
            .into_iter()
            .map(|pref| (pref, filters.distance_option(pref)))
            .collect(),
        selected,
    }
}
