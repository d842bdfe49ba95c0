//! HTTP transport for the waitlist API.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;
use waitlist_types::WaitlistSubmission;

use crate::error::ClientError;
use crate::transport::{TransportResponse, WaitlistTransport};

/// Connect timeout (TCP handshake + TLS).
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default total request timeout.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const SUBMIT_PATH: &str = "api/waitlist";

/// Configuration for the waitlist client.
#[derive(Debug, Clone)]
pub struct WaitlistClientConfig {
    /// Origin serving the API (e.g., "https://example.com")
    pub base_url: Url,

    /// Total request timeout (default: 30s)
    pub timeout: Option<Duration>,
}

/// `reqwest`-backed transport posting submissions as JSON.
pub struct WaitlistClient {
    submit_url: Url,
    http_client: reqwest::Client,
}

impl WaitlistClient {
    /// Create a new client.
    ///
    /// Fails when the base URL cannot carry a path (e.g., `mailto:`) or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: WaitlistClientConfig) -> Result<Self, ClientError> {
        if config.base_url.cannot_be_a_base() {
            return Err(ClientError::Config(format!(
                "base_url {} cannot be used as a base",
                config.base_url
            )));
        }

        let submit_url = submit_url(&config.base_url)?;

        let http_client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(config.timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
            .build()?;

        Ok(Self {
            submit_url,
            http_client,
        })
    }

    pub fn submit_url(&self) -> &Url {
        &self.submit_url
    }
}

#[async_trait]
impl WaitlistTransport for WaitlistClient {
    async fn post_submission(
        &self,
        submission: &WaitlistSubmission,
    ) -> Result<TransportResponse, ClientError> {
        let response = self
            .http_client
            .post(self.submit_url.clone())
            .json(submission)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}

fn submit_url(base_url: &Url) -> Result<Url, ClientError> {
    // Join relative to the base path so "https://host/app" and "https://host/app/" agree.
    let mut base = base_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(SUBMIT_PATH)
        .map_err(|e| ClientError::Config(format!("invalid base_url: {e}")))
}
