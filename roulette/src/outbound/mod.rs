//! Outbound adapters implementing domain ports for external services.
//!
//! - **gemini**: recommendation and reverse-geocode sources over the Gemini
//!   REST API
//! - **location**: IP-geolocation and fixed-position providers
//! - **system_browser**: platform URL opener for directions links
//!
//! Adapters translate between domain types and wire formats. They contain no
//! application logic.

pub mod gemini;
pub mod location;
pub mod system_browser;
