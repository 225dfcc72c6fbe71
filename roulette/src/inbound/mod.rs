//! Inbound adapters driving the application.
//!
//! - **terminal**: line-oriented command front end rendering [`AppView`]s
//!
//! [`AppView`]: crate::domain::AppView

pub mod terminal;
