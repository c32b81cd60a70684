//! Page fetcher module
//!
//! This module retrieves raw HTML for a single URL over HTTP. It is a
//! single-level fetch: redirects are followed up to a fixed cap, but no links
//! are discovered or crawled.

mod config;
mod error;

pub use config::{FetcherConfig, FetcherConfigBuilder};
pub use error::FetchError;

use reqwest::Client as ReqwestClient;
use reqwest::redirect::Policy;
use tracing::{debug, instrument};

/// A fetched page with its raw HTML and post-redirect URL
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Raw HTML body of the response
    pub html: String,

    /// The final URL after any redirects were followed
    pub final_url: String,
}

/// Retrieves raw HTML for one URL per call
///
/// The underlying client is connection-pooled and safe to share across
/// concurrent pipelines.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: ReqwestClient,
}

impl Fetcher {
    /// Create a new fetcher from a configuration
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout())
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Issue a single GET for the URL and return its HTML
    ///
    /// Fails with `FetchError::Status` on a non-2xx response and
    /// `FetchError::Transport` on network, DNS, timeout, or redirect-loop
    /// failures. No retries happen here; the orchestrator owns the retry
    /// policy.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        debug!("Fetching page");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let final_url = response.url().to_string();
        let html = response.text().await?;

        debug!(
            final_url = %final_url,
            bytes = html.len(),
            "Fetched page"
        );

        Ok(FetchedPage { html, final_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn fetcher() -> Fetcher {
        Fetcher::new(FetcherConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body><h1>Hello</h1></body></html>")
            .create_async()
            .await;

        let page = fetcher()
            .fetch(&format!("{}/page", server.url()))
            .await
            .unwrap();

        assert!(page.html.contains("<h1>Hello</h1>"));
        assert!(page.final_url.ends_with("/page"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_follows_redirect() {
        let mut server = Server::new_async().await;
        let target = server
            .mock("GET", "/target")
            .with_status(200)
            .with_body("<html><body>moved here</body></html>")
            .create_async()
            .await;
        let _redirect = server
            .mock("GET", "/old")
            .with_status(301)
            .with_header("location", &format!("{}/target", server.url()))
            .create_async()
            .await;

        let page = fetcher()
            .fetch(&format!("{}/old", server.url()))
            .await
            .unwrap();

        assert!(page.final_url.ends_with("/target"));
        assert!(page.html.contains("moved here"));
        target.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_non_2xx_is_status_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let err = fetcher()
            .fetch(&format!("{}/missing", server.url()))
            .await
            .unwrap_err();

        match err {
            FetchError::Status { status, .. } => assert_eq!(status, 404),
            other => panic!("expected status error, got {:?}", other),
        }
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn test_fetch_transport_error_is_transient() {
        // Nothing listens on this port.
        let err = fetcher().fetch("http://127.0.0.1:9/page").await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
        assert!(err.is_transient());
    }
}
