//! Geocoding, static-map, weather, and image-store ports.

pub mod conditions;
pub mod provider;

pub use provider::{Geocoder, ImageStore, StaticMapRenderer, WeatherProvider};
