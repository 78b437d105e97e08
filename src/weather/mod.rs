//! Current weather lookups for the `get_weather` tool

pub mod client;

use async_trait::async_trait;

pub use client::{describe_weather, OpenWeatherClient, DEFAULT_WEATHER_URL};

/// Source of current-weather sentences
///
/// Implementations never fail; provider problems come back as an apology
/// that names the location and the reason.
#[async_trait]
pub trait WeatherService: Send + Sync {
    async fn current_weather(&self, location: &str) -> String;
}
