use crate::error::{Result, WatchError};
use reqwest::{Client, header};
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36";

/// Source of movie page bodies.
#[async_trait::async_trait]
pub trait PageFetcher {
    /// Fetch the page at `url` and return its body as text.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches pages over HTTP with a browser user agent.
///
/// The body is returned whatever the status code, unless the fetcher was
/// built with [`HttpFetcher::fail_on_http_error`].
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
    fail_on_http_error: bool,
}

impl HttpFetcher {
    /// `timeout` of `None` means a request may block forever.
    pub fn new(user_agent: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(WatchError::Client)?;
        Ok(Self {
            client,
            user_agent: user_agent.into(),
            fail_on_http_error: false,
        })
    }

    /// Turn non-success responses into fetch errors instead of parsing them.
    pub fn fail_on_http_error(mut self, enabled: bool) -> Self {
        self.fail_on_http_error = enabled;
        self
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let to_fetch_error = |source| WatchError::Fetch {
            url: url.to_string(),
            source,
        };

        let mut resp = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(to_fetch_error)?;

        let status = resp.status();
        if !status.is_success() {
            if self.fail_on_http_error {
                resp = resp.error_for_status().map_err(to_fetch_error)?;
            } else {
                tracing::warn!(%url, %status, "non-success response, parsing body anyway");
            }
        }

        resp.text().await.map_err(to_fetch_error)
    }
}
