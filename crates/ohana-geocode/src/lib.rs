//! Geocoding provider for the search engine's location filter.

pub mod client;
pub mod error;
mod retry;
pub mod types;

pub use client::GeocodeClient;
pub use error::GeocodeError;
pub use types::Place;
