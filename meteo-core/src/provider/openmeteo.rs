use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::{
    config::Config,
    error::{MeteoError, Result},
    http::HttpFetcher,
    model::{CurrentWeather, DailyWeather, Geocode, Place},
};

use super::WeatherSource;

const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature";

/// [`WeatherSource`] backed by the public Open-Meteo APIs (no API key).
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    config: Config,
    http: HttpFetcher,
}

impl Default for OpenMeteoClient {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl OpenMeteoClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: HttpFetcher::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    // Absent when nothing matched.
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct DailyResponse {
    daily: DailyWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: CurrentWeather,
}

/// Geocoding search URL. Whitespace runs collapse to a single `+`.
pub fn geocode_url(config: &Config, place_name: &str) -> Result<Url> {
    let name = place_name.split_whitespace().collect::<Vec<_>>().join(" ");
    let count = config.result_count.to_string();

    let url = Url::parse_with_params(
        &config.geocoding_url,
        &[
            ("name", name.as_str()),
            ("count", count.as_str()),
            ("language", config.language.as_str()),
            ("format", "json"),
        ],
    )?;

    Ok(url)
}

pub fn daily_url(config: &Config, latitude: f64, longitude: f64) -> Result<Url> {
    forecast_url(config, latitude, longitude, ("daily", DAILY_FIELDS))
}

pub fn current_url(config: &Config, latitude: f64, longitude: f64) -> Result<Url> {
    forecast_url(config, latitude, longitude, ("current", CURRENT_FIELDS))
}

fn forecast_url(
    config: &Config,
    latitude: f64,
    longitude: f64,
    (block, fields): (&str, &str),
) -> Result<Url> {
    let latitude = latitude.to_string();
    let longitude = longitude.to_string();

    let url = Url::parse_with_params(
        &config.forecast_url,
        &[
            ("latitude", latitude.as_str()),
            ("longitude", longitude.as_str()),
            ("timezone", "auto"),
            (block, fields),
        ],
    )?;

    Ok(url)
}

pub fn parse_geocode(body: &[u8]) -> Result<Geocode> {
    let parsed: GeocodeResponse = serde_json::from_slice(body)
        .map_err(|source| MeteoError::Parse { what: "geocoding", source })?;

    Ok(match parsed.results.into_iter().next() {
        Some(place) => Geocode::Found(place),
        None => Geocode::NotFound,
    })
}

pub fn parse_daily(body: &[u8]) -> Result<DailyWeather> {
    let parsed: DailyResponse = serde_json::from_slice(body)
        .map_err(|source| MeteoError::Parse { what: "daily forecast", source })?;

    Ok(parsed.daily)
}

pub fn parse_current(body: &[u8]) -> Result<CurrentWeather> {
    let parsed: CurrentResponse = serde_json::from_slice(body)
        .map_err(|source| MeteoError::Parse { what: "current weather", source })?;

    Ok(parsed.current)
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn resolve_geocode(&self, place_name: &str) -> Result<Geocode> {
        let url = geocode_url(&self.config, place_name)?;
        let body = self.http.fetch(&url).await?;
        let geocode = parse_geocode(&body)?;

        match &geocode {
            Geocode::Found(place) => debug!(
                "Resolved {place_name:?} to {}, {} ({}, {})",
                place.name, place.country, place.latitude, place.longitude
            ),
            Geocode::NotFound => debug!("No geocoding match for {place_name:?}"),
        }

        Ok(geocode)
    }

    async fn fetch_daily(&self, latitude: f64, longitude: f64) -> Result<DailyWeather> {
        let url = daily_url(&self.config, latitude, longitude)?;
        let body = self.http.fetch(&url).await?;
        let daily = parse_daily(&body)?;

        debug!("Daily forecast covers {} day(s)", daily.len());
        Ok(daily)
    }

    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<CurrentWeather> {
        let url = current_url(&self.config, latitude, longitude)?;
        let body = self.http.fetch(&url).await?;

        parse_current(&body)
    }
}
