// ============================================================================
// fedsign - Signed Outbound Federation Requests
// ============================================================================
//
// Authenticated server-to-server HTTP on behalf of a local actor:
// - HTTP signature construction (rsa-sha256 over a canonical string)
// - signed POST delivery of activities to remote inboxes
// - signed GET retrieval of remote objects
//
// Keypair generation/persistence, inbound verification and delivery
// retry live outside this crate, behind the KeypairStore and Transport
// seams.
//
// ============================================================================

pub mod activity;
pub mod client;
pub mod config;
pub mod error;
pub mod keystore;
pub mod signing;
pub mod transport;

pub use activity::Activity;
pub use client::FederationClient;
pub use config::OutboundConfig;
pub use error::{OutboundError, OutboundResult};
pub use keystore::{InMemoryKeypairStore, KeypairStore, StoredKeypair};
pub use signing::{
    create_signed_get, create_signed_post, ActorKeypair, SignedEnvelope, ACTIVITY_CONTENT_TYPE,
    SIGNATURE_ALGORITHM,
};
pub use transport::{OutboundRequest, ReqwestTransport, Transport, TransportResponse};
