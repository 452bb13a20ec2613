//! Core library for the `meteo` CLI.
//!
//! This crate defines:
//! - The HTTP fetcher and the Open-Meteo geocoding / forecast client
//! - The `WeatherSource` seam the CLI talks to
//! - Shared domain models (places, current and daily weather)
//! - The WMO weather code to icon table
//!
//! It is used by `meteo-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod http;
pub mod icon;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::{MeteoError, Result};
pub use icon::{FALLBACK_ICON, describe, icon_for};
pub use model::{CurrentWeather, DailyWeather, DayForecast, Geocode, Place};
pub use provider::{WeatherSource, openmeteo::OpenMeteoClient};
