use serde::{Deserialize, Serialize};

use crate::utils::null_as_default;
use crate::{
    Address, BridgeConfig, BridgeSetting, Duration, GenesisValidator, Hash, RewardsConfig,
    TokenConfig,
};

/// Name under which the engine's configuration is registered in a genesis document.
pub const CONSENSUS_NAME: &str = "polybft";

/// Configuration of the PolyBFT consensus protocol, as found in genesis.
///
/// Fields missing from the source document take their zero value.
/// The relation between `sprint_size` and `epoch_size` is not checked here,
/// it belongs to the consuming engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsensusConfig {
    /// Genesis validators
    #[serde(deserialize_with = "null_as_default")]
    pub initial_validator_set: Vec<GenesisValidator>,

    /// Rootchain bridge configuration
    pub bridge: BridgeSetting,

    /// Number of blocks in an epoch
    pub epoch_size: u64,

    /// Reward assigned to validators for sealing blocks, per epoch
    pub epoch_reward: u64,

    /// Number of blocks in a sprint
    pub sprint_size: u64,

    /// Target interval between blocks
    pub block_time: Duration,

    /// Initial governance address
    pub governance: Address,

    /// Name, symbol and decimals of the native token
    pub native_token_config: Option<TokenConfig>,

    /// Expected state root at genesis
    pub initial_trie_root: Hash,

    /// Maximum number of validators in the validator set
    pub max_validator_set_size: u64,

    /// Rewards distribution
    pub reward_config: Option<RewardsConfig>,
}

impl ConsensusConfig {
    pub fn is_bridge_enabled(&self) -> bool {
        self.bridge.is_enabled()
    }

    pub fn bridge_config(&self) -> Option<&BridgeConfig> {
        self.bridge.as_enabled()
    }
}
