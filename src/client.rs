// ============================================================================
// Federation Client - Signed Delivery and Retrieval
// ============================================================================
//
// Signed server-to-server requests on behalf of a local actor:
// - deliver: POST an activity to a remote inbox, fire-and-forget
// - fetch_signed: GET a remote object, proving the requester's identity
//
// Each call resolves its own keypair, stamps its own Date header and
// produces an independent signature; concurrent calls share nothing but
// the key store.
//
// ============================================================================

use std::collections::HashMap;
use std::sync::Arc;

use crate::activity::Activity;
use crate::config::OutboundConfig;
use crate::error::OutboundError;
use crate::keystore::KeypairStore;
use crate::signing::{create_signed_get, create_signed_post, ActorKeypair, ACTIVITY_CONTENT_TYPE};
use crate::transport::{OutboundRequest, ReqwestTransport, Transport};

/// Client for signed outbound federation requests
#[derive(Clone)]
pub struct FederationClient {
    config: OutboundConfig,
    keys: Arc<dyn KeypairStore>,
    transport: Arc<dyn Transport>,
}

impl FederationClient {
    /// Create a client using the reqwest transport
    pub fn new(config: OutboundConfig, keys: Arc<dyn KeypairStore>) -> Self {
        Self::with_transport(config, keys, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client with a custom transport
    pub fn with_transport(
        config: OutboundConfig,
        keys: Arc<dyn KeypairStore>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            keys,
            transport,
        }
    }

    /// Deliver an activity to a remote inbox as `actor_id`
    ///
    /// Fire-and-forget: the transport response is not inspected, so a
    /// delivery the remote server rejected is indistinguishable from an
    /// accepted one at this layer. Callers needing delivery guarantees
    /// must layer retry and status handling on top.
    pub async fn deliver(
        &self,
        actor_id: &str,
        inbox_url: &str,
        activity: &Activity,
    ) -> Result<(), OutboundError> {
        let body = serde_json::to_vec(activity).map_err(OutboundError::Serialization)?;
        let keypair = self.resolve_keypair(actor_id).await?;

        let envelope = create_signed_post(&keypair, inbox_url, &body, &self.extra_headers())?;

        tracing::info!(
            actor_id = %actor_id,
            inbox = %inbox_url,
            key_id = %keypair.key_id,
            "Delivering signed activity"
        );

        self.transport
            .execute(OutboundRequest {
                method: envelope.method,
                url: envelope.url,
                headers: envelope.headers,
                body: Some(body),
            })
            .await?;

        Ok(())
    }

    /// Fetch a remote object with a signed GET as `actor_id`
    ///
    /// The response body is decoded as JSON; a transport failure and an
    /// undecodable body surface as distinct error kinds.
    pub async fn fetch_signed(
        &self,
        url: &str,
        actor_id: &str,
    ) -> Result<serde_json::Value, OutboundError> {
        let keypair = self.resolve_keypair(actor_id).await?;

        let mut extra = self.extra_headers();
        extra.insert("Accept".to_string(), ACTIVITY_CONTENT_TYPE.to_string());
        let envelope = create_signed_get(&keypair, url, &extra)?;

        tracing::debug!(
            actor_id = %actor_id,
            url = %url,
            "Fetching remote object with signed GET"
        );

        let response = self
            .transport
            .execute(OutboundRequest {
                method: envelope.method,
                url: envelope.url,
                headers: envelope.headers,
                body: None,
            })
            .await?;

        serde_json::from_slice(&response.body).map_err(OutboundError::Parse)
    }

    /// Combine the stored private key with the key id remote verifiers
    /// dereference for this actor
    async fn resolve_keypair(&self, actor_id: &str) -> Result<ActorKeypair, OutboundError> {
        let stored = self.keys.resolve(actor_id).await?;
        Ok(ActorKeypair {
            private_key_pem: stored.private_key_pem,
            key_id: self.config.key_id_for(actor_id),
        })
    }

    fn extra_headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert("User-Agent".to_string(), self.config.user_agent.clone());
        headers
    }
}
