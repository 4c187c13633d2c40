use std::sync::Arc;

use async_trait::async_trait;

use crate::FindPeersRequest;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Peer selection behind the discovery RPC.
///
/// Only ever called with a request that passed validation. Implementations
/// may return fewer than `request.count()` peers, or none at all.
#[async_trait]
pub trait PeerSource: Send + Sync {
    async fn find_peers(&self, request: &FindPeersRequest) -> Result<Vec<String>, BoxError>;
}

#[async_trait]
impl<S> PeerSource for Arc<S>
where
    S: PeerSource + ?Sized,
{
    async fn find_peers(&self, request: &FindPeersRequest) -> Result<Vec<String>, BoxError> {
        (**self).find_peers(request).await
    }
}
