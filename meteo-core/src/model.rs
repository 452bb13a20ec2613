use serde::{Deserialize, Serialize};

use crate::error::{MeteoError, Result};

/// A geocoded place, as returned by the geocoding service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Some candidates (oceans, disputed areas) come without a country.
    #[serde(default)]
    pub country: String,
}

/// Outcome of a geocoding lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Geocode {
    Found(Place),
    NotFound,
}

impl Geocode {
    pub fn place(&self) -> Option<&Place> {
        match self {
            Geocode::Found(place) => Some(place),
            Geocode::NotFound => None,
        }
    }
}

/// Instantaneous conditions from the forecast `current` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub time: String,

    #[serde(rename = "temperature_2m")]
    pub temperature: f64,

    #[serde(rename = "apparent_temperature")]
    pub feels_like: f64,
}

/// Daily series from the forecast `daily` block. Index 0 is today.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyWeather {
    pub time: Vec<String>,

    #[serde(rename = "temperature_2m_max")]
    pub max: Vec<f64>,

    #[serde(rename = "temperature_2m_min")]
    pub min: Vec<f64>,

    pub weather_code: Vec<i32>,
}

/// One day of a [`DailyWeather`] series.
#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    pub date: String,
    pub max: f64,
    pub min: f64,
    pub weather_code: i32,
}

impl DailyWeather {
    /// Number of complete days, bounded by the shortest series.
    pub fn len(&self) -> usize {
        self.time
            .len()
            .min(self.max.len())
            .min(self.min.len())
            .min(self.weather_code.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Today's forecast, or an error naming the series with no entry.
    pub fn today(&self) -> Result<DayForecast> {
        let date = self.time.first().ok_or(MeteoError::EmptyForecast { field: "time" })?;
        let max = self
            .max
            .first()
            .ok_or(MeteoError::EmptyForecast { field: "temperature_2m_max" })?;
        let min = self
            .min
            .first()
            .ok_or(MeteoError::EmptyForecast { field: "temperature_2m_min" })?;
        let weather_code = self
            .weather_code
            .first()
            .ok_or(MeteoError::EmptyForecast { field: "weather_code" })?;

        Ok(DayForecast {
            date: date.clone(),
            max: *max,
            min: *min,
            weather_code: *weather_code,
        })
    }

    pub fn days(&self) -> impl Iterator<Item = DayForecast> + '_ {
        (0..self.len()).map(|i| DayForecast {
            date: self.time[i].clone(),
            max: self.max[i],
            min: self.min[i],
            weather_code: self.weather_code[i],
        })
    }
}
