//! # HTTP Transport
//!
//! [`QuoteTransport`] backed by `reqwest`.
//!
//! Provides:
//! - Configurable timeout
//! - Query-string encoding of the request parameters
//! - Mapping of network and status failures to `CarrierError::Transport`
//!
//! There is no retry; a failed exchange is reported as-is.

use crate::infrastructure::carriers::error::{CarrierError, CarrierResult};
use crate::infrastructure::carriers::traits::{QueryParams, QuoteTransport};
use crate::infrastructure::config::CorreiosConfig;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP transport for carrier quotes.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpTransport {
    /// Creates a transport with the specified timeout.
    ///
    /// # Arguments
    ///
    /// * `timeout_ms` - Request timeout in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Transport` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> CarrierResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| CarrierError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout_ms })
    }

    /// Creates a transport using the timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns `CarrierError::Transport` if the client cannot be created.
    pub fn from_config(config: &CorreiosConfig) -> CarrierResult<Self> {
        Self::new(config.timeout_ms())
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Reads the body of a successful response.
    async fn handle_response(&self, response: Response) -> CarrierResult<Vec<u8>> {
        let status = response.status();

        if status.is_success() {
            response
                .bytes()
                .await
                .map(|body| body.to_vec())
                .map_err(|e| CarrierError::transport(format!("Failed to read response: {}", e)))
        } else {
            Err(CarrierError::transport(format!("HTTP error ({})", status)))
        }
    }

    /// Maps a reqwest error to a CarrierError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> CarrierError {
        if error.is_timeout() {
            CarrierError::transport(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            CarrierError::transport(format!("Connection failed: {}", error))
        } else {
            CarrierError::transport(format!("HTTP request failed: {}", error))
        }
    }
}

#[async_trait]
impl QuoteTransport for HttpTransport {
    async fn get(&self, url: &str, query: &QueryParams) -> CarrierResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn new_transport() {
        let transport = HttpTransport::new(5000);
        assert!(transport.is_ok());
        assert_eq!(transport.unwrap().timeout_ms(), 5000);
    }

    #[test]
    fn from_config_uses_timeout() {
        let config = CorreiosConfig::default().with_timeout_ms(1500);
        let transport = HttpTransport::from_config(&config).unwrap();
        assert_eq!(transport.timeout_ms(), 1500);
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let transport = HttpTransport::new(500).unwrap();
        let err = transport
            .get("http://127.0.0.1:9/calculador", &QueryParams::new())
            .await
            .unwrap_err();
        assert!(err.is_transport_error());
    }
}
