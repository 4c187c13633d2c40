use polybft_proto::{self as proto, Protobuf};
use tracing::{debug, trace};

use crate::{Error, FindPeersRequest, FindPeersResponse, PeerSource};

/// Server side of the `FindPeers` RPC.
///
/// Requests are validated before the [`PeerSource`] is consulted, and
/// responses never hold more than the requested number of peers.
#[derive(Debug)]
pub struct DiscoveryService<S> {
    source: S,
}

impl<S> DiscoveryService<S>
where
    S: PeerSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn find_peers(&self, req: proto::FindPeersReq) -> Result<proto::FindPeersResp, Error> {
        let request = FindPeersRequest::from_proto(req)?;
        let response = self.serve(&request).await?;
        Ok(response.to_proto())
    }

    /// Decode a request from its Protobuf encoding and return the encoded response.
    pub async fn handle(&self, bytes: &[u8]) -> Result<Vec<u8>, Error> {
        let request = FindPeersRequest::from_bytes(bytes)?;
        let response = self.serve(&request).await?;
        Ok(response.to_bytes())
    }

    pub async fn serve(&self, request: &FindPeersRequest) -> Result<FindPeersResponse, Error> {
        let mut nodes = self
            .source
            .find_peers(request)
            .await
            .map_err(Error::Source)?;

        if nodes.len() > request.count() {
            trace!(
                "Peer source returned {} peers, truncating to {}",
                nodes.len(),
                request.count()
            );

            nodes.truncate(request.count());
        }

        debug!(
            key = request.key().unwrap_or_default(),
            count = request.count(),
            found = nodes.len(),
            "Served peers request"
        );

        Ok(FindPeersResponse { nodes })
    }
}
