/// Public Open-Meteo geocoding endpoint.
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Public Open-Meteo forecast endpoint.
pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Endpoint and request settings for [`OpenMeteoClient`](crate::OpenMeteoClient).
///
/// There is no file or environment backing; `Config::default()` targets the
/// public Open-Meteo hosts and the builder methods exist to point a client at
/// another server (a local stub in tests, a self-hosted instance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub geocoding_url: String,
    pub forecast_url: String,

    /// Value of the geocoding `language` parameter.
    pub language: String,

    /// Maximum number of geocoding candidates requested.
    pub result_count: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: GEOCODING_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
            language: "en".to_string(),
            result_count: 10,
        }
    }
}

impl Config {
    pub fn with_geocoding_url(mut self, url: impl Into<String>) -> Self {
        self.geocoding_url = url.into();
        self
    }

    pub fn with_forecast_url(mut self, url: impl Into<String>) -> Self {
        self.forecast_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_public_open_meteo_hosts() {
        let cfg = Config::default();

        assert_eq!(cfg.geocoding_url, "https://geocoding-api.open-meteo.com/v1/search");
        assert_eq!(cfg.forecast_url, "https://api.open-meteo.com/v1/forecast");
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.result_count, 10);
    }

    #[test]
    fn builders_override_only_their_endpoint() {
        let cfg = Config::default().with_geocoding_url("http://127.0.0.1:9000/v1/search");

        assert_eq!(cfg.geocoding_url, "http://127.0.0.1:9000/v1/search");
        assert_eq!(cfg.forecast_url, FORECAST_URL);

        let cfg = cfg.with_forecast_url("http://127.0.0.1:9000/v1/forecast");
        assert_eq!(cfg.forecast_url, "http://127.0.0.1:9000/v1/forecast");
    }
}
