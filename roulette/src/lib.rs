//! Restaurant roulette library modules.
//!
//! The crate is laid out as a small hexagon: `domain` owns the data model,
//! the ports, and the recommendation state machine; `outbound` holds the
//! Gemini and location adapters; `inbound` holds the terminal front end.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use config::{ConfigError, RouletteSettings};
