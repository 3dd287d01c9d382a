//! Status API HTTP Client
//!
//! Thin typed wrapper over `reqwest` that resolves endpoint paths against a
//! base URL and returns the raw status and body of each exchange.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::types::{HttpMethod, RawResponse};

/// Errors that can occur when talking to the status API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to encode request body: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for status API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Client for the status-check API
///
/// # Example
/// ```no_run
/// use statusprobe::client::{ApiClient, HttpMethod};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new("http://localhost:8001/api")?;
/// let resp = client.send(HttpMethod::Get, "status", None).await?;
/// println!("GET /status returned {}", resp.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Base URL all endpoints hang off (e.g., http://localhost:8001/api)
    base_url: Url,
    client: Client,
}

impl ApiClient {
    /// Create a client with library-default HTTP settings
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client with a per-request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Self::with_client(base_url, client)
    }

    /// Create a client with a custom HTTP client
    pub fn with_client(base_url: &str, client: Client) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint as `{base_url}/{endpoint}`
    ///
    /// `Url::join` would drop the last base segment (`/api`), so the path is
    /// appended textually instead.
    pub fn endpoint_url(&self, endpoint: &str) -> ApiResult<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{endpoint}"))?)
    }

    /// Send a request and return the raw status and body
    ///
    /// Any HTTP status counts as a response; only transport failures are errors.
    pub async fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        payload: Option<&serde_json::Value>,
    ) -> ApiResult<RawResponse> {
        let url = self.endpoint_url(endpoint)?;
        debug!(method = %method, url = %url, "Sending request");

        let mut request = self
            .client
            .request(method.into(), url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = payload {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status = status, body_len = body.len(), "Received response");
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ApiClient::new("http://localhost:8001/api").unwrap();
        assert_eq!(
            client.endpoint_url("status").unwrap().as_str(),
            "http://localhost:8001/api/status"
        );
        assert_eq!(
            client.endpoint_url("").unwrap().as_str(),
            "http://localhost:8001/api/"
        );
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        let client = ApiClient::new("http://localhost:8001/api/").unwrap();
        assert_eq!(
            client.endpoint_url("status").unwrap().as_str(),
            "http://localhost:8001/api/status"
        );

        let client = ApiClient::new("http://localhost:8001").unwrap();
        assert_eq!(
            client.endpoint_url("status").unwrap().as_str(),
            "http://localhost:8001/status"
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_error() {
        let client = ApiClient::new("http://127.0.0.1:1/api").unwrap();
        let err = client.send(HttpMethod::Get, "", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
    }
}
