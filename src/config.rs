// ============================================================================
// Outbound Federation Configuration
// ============================================================================

use anyhow::Result;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_USER_AGENT: &str = concat!("fedsign/", env!("CARGO_PKG_VERSION"));

/// Configuration consumed by the signed outbound request pipeline
#[derive(Clone, Debug)]
pub struct OutboundConfig {
    /// Instance base URL without a trailing slash (e.g. "https://example.test").
    /// Used to mint key ids that remote verifiers dereference.
    pub base_url: String,
    /// Identifying string sent as User-Agent on every signed request
    pub user_agent: String,
}

impl OutboundConfig {
    /// Create a validated configuration
    ///
    /// The base URL must be absolute http(s) with a host; trailing slashes
    /// are stripped so key id construction is stable.
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>) -> Result<Self> {
        let mut base_url: String = base_url.into();

        let parsed = Url::parse(&base_url)
            .map_err(|e| anyhow::anyhow!("invalid instance base URL '{}': {}", base_url, e))?;
        if parsed.host_str().is_none() {
            anyhow::bail!("instance base URL '{}' has no host", base_url);
        }
        match parsed.scheme() {
            "http" | "https" => {}
            other => anyhow::bail!(
                "instance base URL must use http or https, got '{}'",
                other
            ),
        }

        while base_url.ends_with('/') {
            base_url.pop();
        }

        let user_agent: String = user_agent.into();
        if user_agent.trim().is_empty() {
            anyhow::bail!("outbound user agent must not be empty");
        }

        Ok(Self {
            base_url,
            user_agent,
        })
    }

    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("INSTANCE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let user_agent = std::env::var("OUTBOUND_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
        Self::new(base_url, user_agent)
    }

    /// Public key identifier for a local actor
    ///
    /// Remote verifiers dereference this URL to the actor's public key
    /// document, so its shape is part of the wire contract.
    pub fn key_id_for(&self, actor_id: &str) -> String {
        format!("{}/users/{}#main-key", self.base_url, actor_id)
    }
}
