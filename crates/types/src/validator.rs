use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::numeric::option_big_uint_hex;
use crate::Address;

/// A validator present in the genesis validator set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenesisValidator {
    pub address: Address,

    /// Hex-encoded BLS public key
    pub bls_key: String,

    /// Hex-encoded signature proving possession of the BLS key
    pub signature: String,

    #[serde(with = "option_big_uint_hex")]
    pub balance: Option<BigUint>,

    #[serde(with = "option_big_uint_hex")]
    pub stake: Option<BigUint>,

    /// libp2p multiaddress the validator listens on
    pub multi_addr: String,
}
