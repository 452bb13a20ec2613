use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while talking to the geocoding and forecast services.
#[derive(Debug, Error)]
pub enum MeteoError {
    /// Transport failure: DNS, refused connection, TLS, timeout.
    #[error("Failed to send request to {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the JSON shape we expect.
    #[error("Failed to parse {what} JSON")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid endpoint URL")]
    Url(#[from] url::ParseError),

    /// The forecast did not contain an entry for today.
    #[error("Forecast response contained no data for `{field}`")]
    EmptyForecast { field: &'static str },
}

pub type Result<T> = std::result::Result<T, MeteoError>;
