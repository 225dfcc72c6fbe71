//! Domain primitives, ports, and the recommendation state machine.
//!
//! Purpose: define the strongly typed records exchanged with the adapters
//! and the single owner of application state. Nothing in this module talks
//! to the network or the terminal; those concerns live behind [`ports`].
//!
//! Public surface:
//! - `AppState`: pure transition core returning [`Effect`]s to run.
//! - `Orchestrator`: async shell executing effects over the ports.
//! - `AppView`: read-only projection consumed by presentation.

pub mod app_state;
pub mod coordinates;
pub mod filters;
pub mod language;
pub mod localization;
pub mod orchestrator;
pub mod place;
pub mod ports;
pub mod recent_places;
pub mod request_ticket;

pub use self::app_state::{
    AddressPanel, AppState, AppStatus, AppView, Completion, Effect, FailureMessage, FilterPanel,
    Intent, LocationFailureKind, LocationPanel, PlaceCard, Screen,
};
pub use self::coordinates::{Coordinates, CoordinatesValidationError};
pub use self::filters::{DistancePref, Filters, ParsePreferenceError, PricePref};
pub use self::language::{Language, ParseLanguageError};
pub use self::localization::Translations;
pub use self::orchestrator::{Orchestrator, RoulettePorts};
pub use self::place::{PLACEHOLDER_PHOTO_URL, Place, PriceBand};
pub use self::recent_places::{RECENT_PLACES_CAPACITY, RecentPlaces};
pub use self::request_ticket::{RequestSequence, RequestTicket};
