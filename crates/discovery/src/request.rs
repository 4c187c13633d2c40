use polybft_proto::{self as proto, Protobuf};
use thiserror::Error;

use crate::Error;

/// Largest number of peers a single request may ask for.
pub const MAX_PEERS_PER_REQUEST: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Invalid key `{0}`: only ASCII letters and digits are allowed")]
    InvalidKey(String),

    #[error("Invalid count {0}: must be between 1 and {MAX_PEERS_PER_REQUEST}")]
    CountOutOfRange(i64),
}

/// A `FindPeers` request whose inputs are within bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FindPeersRequest {
    key: Option<String>,
    count: usize,
}

impl FindPeersRequest {
    /// An empty `key` means no filter.
    pub fn new(key: impl Into<String>, count: i64) -> Result<Self, RequestError> {
        let key = key.into();

        if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(RequestError::InvalidKey(key));
        }

        let count = usize::try_from(count)
            .ok()
            .filter(|n| (1..=MAX_PEERS_PER_REQUEST).contains(n))
            .ok_or(RequestError::CountOutOfRange(count))?;

        Ok(Self {
            key: (!key.is_empty()).then_some(key),
            count,
        })
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Protobuf for FindPeersRequest {
    type Proto = proto::FindPeersReq;
    type Error = Error;

    fn from_proto(proto: Self::Proto) -> Result<Self, Self::Error> {
        Ok(Self::new(proto.key, proto.count)?)
    }

    fn to_proto(&self) -> Self::Proto {
        proto::FindPeersReq {
            key: self.key.clone().unwrap_or_default(),
            count: self.count as i64,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FindPeersResponse {
    pub nodes: Vec<String>,
}

impl Protobuf for FindPeersResponse {
    type Proto = proto::FindPeersResp;
    type Error = Error;

    fn from_proto(proto: Self::Proto) -> Result<Self, Self::Error> {
        Ok(Self { nodes: proto.nodes })
    }

    fn to_proto(&self) -> Self::Proto {
        proto::FindPeersResp {
            nodes: self.nodes.clone(),
        }
    }
}
