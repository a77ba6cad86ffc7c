// ============================================================================
// Outbound HTTP Transport
// ============================================================================

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::OutboundError;

/// A fully signed request handed to the transport
#[derive(Clone, Debug)]
pub struct OutboundRequest {
    pub method: String,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

/// The response surface callers need: a status and the raw body bytes
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs the actual network I/O for signed requests
///
/// Timeouts and cancellation are owned by implementations; the signing
/// pipeline itself has no suspension points.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: OutboundRequest) -> Result<TransportResponse, OutboundError>;
}

/// reqwest-backed production transport
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Use a caller-configured client (custom TLS, proxies, timeouts)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: OutboundRequest) -> Result<TransportResponse, OutboundError> {
        let method = reqwest::Method::from_bytes(request.method.as_bytes())
            .map_err(|_| OutboundError::transport(format!("invalid HTTP method: {}", request.method)))?;

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            "Executing outbound request"
        );

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse { status, body })
    }
}
