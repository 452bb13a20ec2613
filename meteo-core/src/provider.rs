use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    model::{CurrentWeather, DailyWeather, Geocode},
};

pub mod openmeteo;

/// The three lookups a weather report is built from.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Resolve a free-text place name to its first geocoding candidate.
    async fn resolve_geocode(&self, place_name: &str) -> Result<Geocode>;

    async fn fetch_daily(&self, latitude: f64, longitude: f64) -> Result<DailyWeather>;

    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather>;
}
