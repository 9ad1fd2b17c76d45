//! HTTP GET seam used by `weather`, `neofetch` and `curl`.
//!
//! Handlers only need the status and the body as text, the same two things a
//! browser `fetch()` + `response.text()` gives back.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    /// 2xx, like `Response.ok`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &Url) -> Result<FetchResponse, FetchError>;
}

/// reqwest-backed fetcher. Non-2xx statuses are returned, not raised.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        // wttr.in picks plain text vs HTML from the user agent; curl-like gets text.
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("curl/8 webterm/", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::Other(format!(
                "unsupported URL scheme '{}'",
                url.scheme()
            )));
        }
        tracing::debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::trace!(%url, status, bytes = body.len(), "response");
        Ok(FetchResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(
            FetchResponse {
                status: 200,
                body: "x".into()
            }
            .is_success()
        );
        assert!(
            FetchResponse {
                status: 204,
                body: String::new()
            }
            .is_success()
        );
        assert!(
            !FetchResponse {
                status: 404,
                body: "nope".into()
            }
            .is_success()
        );
        assert!(
            !FetchResponse {
                status: 302,
                body: String::new()
            }
            .is_success()
        );
    }

    #[test]
    fn client_builds_with_and_without_timeout() {
        assert!(HttpFetcher::new(None).is_ok());
        assert!(HttpFetcher::new(Some(Duration::from_secs(3))).is_ok());
    }

    #[tokio::test]
    async fn non_http_scheme_refused_before_sending() {
        let fetcher = HttpFetcher::new(None).unwrap();
        let url = Url::parse("ftp://example.com/file").unwrap();
        let err = fetcher.get(&url).await.unwrap_err();
        assert!(err.to_string().contains("unsupported URL scheme 'ftp'"));
    }

    #[test]
    fn other_error_displays_message() {
        let e = FetchError::Other("connection refused".into());
        assert_eq!(e.to_string(), "connection refused");
    }
}
