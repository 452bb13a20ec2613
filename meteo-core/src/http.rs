use bytes::Bytes;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::{MeteoError, Result};

/// Thin GET-only wrapper around a shared [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// GET `url` and return the whole body.
    ///
    /// Non-success statuses are errors; the body is always read to the end so
    /// the connection goes back to the pool.
    pub async fn fetch(&self, url: &Url) -> Result<Bytes> {
        debug!(%url, "GET");

        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|source| MeteoError::Request { url: url.to_string(), source })?;

        let status = res.status();
        debug!(%url, %status, "response");

        let body = res
            .bytes()
            .await
            .map_err(|source| MeteoError::Body { url: url.to_string(), source })?;

        if !status.is_success() {
            return Err(MeteoError::Status {
                url: url.to_string(),
                status,
                body: truncate_body(&String::from_utf8_lossy(&body)),
            });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn url_for(server: &MockServer, p: &str) -> Url {
        Url::parse(&format!("{}{p}", server.uri())).expect("valid url")
    }

    #[tokio::test]
    async fn returns_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"a\":1}"))
            .expect(1)
            .mount(&server)
            .await;

        let body = HttpFetcher::new().fetch(&url_for(&server, "/ok")).await.expect("fetch ok");

        assert_eq!(&body[..], b"{\"a\":1}");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = HttpFetcher::new().fetch(&url_for(&server, "/broken")).await.unwrap_err();

        match err {
            MeteoError::Status { status, body, .. } => {
                assert_eq!(status.as_u16(), 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_failure_is_a_request_error() {
        // Nothing listens on port 1.
        let url = Url::parse("http://127.0.0.1:1/").expect("valid url");

        let err = HttpFetcher::new().fetch(&url).await.unwrap_err();

        assert!(matches!(err, MeteoError::Request { .. }));
        assert!(err.to_string().contains("127.0.0.1:1"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(150);
        let cut = truncate_body(&long);

        assert!(cut.ends_with("..."));
        assert!(cut.len() <= 203);
        assert_eq!(truncate_body("short"), "short");
    }
}
