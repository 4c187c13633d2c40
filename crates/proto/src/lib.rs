//! Protobuf messages of the peer discovery RPC.

use thiserror::Error;

use prost::{DecodeError, Message};

include!(concat!(env!("OUT_DIR"), "/discovery.v1.rs"));

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to decode Protobuf message")]
    Decode(#[from] DecodeError),
}

/// Conversion between a domain type and its Protobuf message.
///
/// `from_proto` is where a message's contents are checked, so its error type
/// is chosen by the domain type.
pub trait Protobuf: Sized {
    type Proto: Message + Default;

    type Error: From<Error>;

    fn from_proto(proto: Self::Proto) -> Result<Self, Self::Error>;

    fn to_proto(&self) -> Self::Proto;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        let proto = Self::Proto::decode(bytes).map_err(Error::from)?;
        Self::from_proto(proto)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_proto().encode_to_vec()
    }
}

#[cfg(test)]
mod tests {
    use prost::Name;

    use super::*;

    #[test]
    fn find_peers_req_wire_format() {
        let req = FindPeersReq {
            key: "abc".to_string(),
            count: 3,
        };

        assert_eq!(
            req.encode_to_vec(),
            vec![0x0a, 0x03, b'a', b'b', b'c', 0x10, 0x03]
        );
    }

    #[test]
    fn find_peers_resp_wire_format() {
        let resp = FindPeersResp {
            nodes: vec!["a".to_string(), "b".to_string()],
        };

        assert_eq!(
            resp.encode_to_vec(),
            vec![0x0a, 0x01, b'a', 0x0a, 0x01, b'b']
        );
    }

    #[test]
    fn type_names() {
        assert_eq!(FindPeersReq::full_name(), "discovery.v1.FindPeersReq");
        assert_eq!(FindPeersResp::full_name(), "discovery.v1.FindPeersResp");
    }

    #[test]
    fn decode_garbage() {
        let err = FindPeersReq::decode(&[0xff, 0xff, 0xff][..]).unwrap_err();
        assert!(!Error::from(err).to_string().is_empty());
    }
}
