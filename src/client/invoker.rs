//! Calls the proxy's execute endpoint.

use crate::error::ClientError;
use crate::proxy::{ApiRequest, ApiResponse};

pub const EXECUTE_PATH: &str = "/api/proxy/execute";

/// Client for a running proxy. Issues exactly one call per send, with no
/// timeout and no retry.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    base_url: String,
    http: reqwest::Client,
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn execute_url(&self) -> String {
        format!("{}{}", self.base_url, EXECUTE_PATH)
    }

    /// Posts `request` and decodes the envelope, whatever the HTTP status.
    ///
    /// Transport failures and undecodable responses are both reported as
    /// [`ClientError::Connection`].
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ClientError> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending through proxy");

        let response = self
            .http
            .post(self.execute_url())
            .json(request)
            .send()
            .await
            .map_err(ClientError::Connection)?;

        response
            .json::<ApiResponse>()
            .await
            .map_err(ClientError::Connection)
    }
}
