//! Request/response boundary of the `FindPeers` discovery RPC.
//!
//! Transport and peer selection live elsewhere; this crate checks the
//! request bounds and caps the response.

mod request;
mod service;
mod source;

pub use request::{FindPeersRequest, FindPeersResponse, RequestError, MAX_PEERS_PER_REQUEST};
pub use service::DiscoveryService;
pub use source::{BoxError, PeerSource};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request rejected before reaching peer selection
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error(transparent)]
    Proto(#[from] polybft_proto::Error),

    /// Peer selection failed
    #[error("Peer source failed: {0}")]
    Source(#[source] BoxError),
}

impl Error {
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}
