//! Configuration model of the PolyBFT consensus engine.
//!
//! Every type here is an immutable value produced once from a genesis
//! document and shared by reference afterwards.

mod address;
mod bridge;
mod consensus;
mod duration;
mod hash;
mod rewards;
mod token;
mod utils;
mod validator;

pub mod numeric;

pub use address::{Address, ParseHexError};
pub use bridge::{BridgeConfig, BridgeSetting, RootchainConfig};
pub use consensus::{ConsensusConfig, CONSENSUS_NAME};
pub use duration::Duration;
pub use hash::Hash;
pub use rewards::{RewardsConfig, RewardsConfigError};
pub use token::TokenConfig;
pub use validator::GenesisValidator;

pub use num_bigint::BigUint;
