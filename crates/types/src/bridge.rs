use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::utils::null_as_default;
use crate::Address;

/// Rootchain contract addresses and endpoint, as persisted in genesis.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    #[serde(rename = "stateSenderAddress")]
    pub state_sender_addr: Address,

    #[serde(rename = "checkpointManagerAddress")]
    pub checkpoint_manager_addr: Address,

    #[serde(rename = "exitHelperAddress")]
    pub exit_helper_addr: Address,

    #[serde(rename = "erc20PredicateAddress")]
    pub root_erc20_predicate_addr: Address,

    #[serde(rename = "nativeERC20Address")]
    pub root_native_erc20_addr: Address,

    #[serde(rename = "erc721Address")]
    pub root_erc721_addr: Address,

    #[serde(rename = "erc721PredicateAddress")]
    pub root_erc721_predicate_addr: Address,

    #[serde(rename = "erc1155Address")]
    pub root_erc1155_addr: Address,

    #[serde(rename = "erc1155PredicateAddress")]
    pub root_erc1155_predicate_addr: Address,

    #[serde(rename = "customSupernetManagerAddr")]
    pub custom_supernet_manager_addr: Address,

    #[serde(rename = "stakeManagerAddr")]
    pub stake_manager_addr: Address,

    /// JSON-RPC endpoint of the rootchain node
    #[serde(rename = "jsonRPCEndpoint")]
    pub json_rpc_endpoint: String,

    /// Height from which events of each tracked rootchain contract are indexed
    #[serde(
        rename = "eventTrackerStartBlocks",
        deserialize_with = "null_as_default"
    )]
    pub event_tracker_start_blocks: BTreeMap<Address, u64>,
}

/// Whether the chain is bridged to a rootchain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<BridgeConfig>", into = "Option<BridgeConfig>")]
pub enum BridgeSetting {
    /// No `bridge` section, or `bridge: null`
    #[default]
    Disabled,

    Enabled(BridgeConfig),
}

impl BridgeSetting {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    pub fn as_enabled(&self) -> Option<&BridgeConfig> {
        match self {
            Self::Enabled(config) => Some(config),
            Self::Disabled => None,
        }
    }
}

impl From<Option<BridgeConfig>> for BridgeSetting {
    fn from(config: Option<BridgeConfig>) -> Self {
        match config {
            Some(config) => Self::Enabled(config),
            None => Self::Disabled,
        }
    }
}

impl From<BridgeSetting> for Option<BridgeConfig> {
    fn from(setting: BridgeSetting) -> Self {
        match setting {
            BridgeSetting::Enabled(config) => Some(config),
            BridgeSetting::Disabled => None,
        }
    }
}

impl From<BridgeConfig> for BridgeSetting {
    fn from(config: BridgeConfig) -> Self {
        Self::Enabled(config)
    }
}

/// Rootchain metadata observed at runtime: the endpoint plus every deployed
/// contract, including precompiles and token templates that genesis does not
/// persist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootchainConfig {
    pub json_rpc_addr: String,

    pub state_sender_address: Address,
    pub checkpoint_manager_address: Address,
    pub bls_address: Address,
    pub bn256g2_address: Address,
    pub exit_helper_address: Address,
    pub root_erc20_predicate_address: Address,
    pub root_native_erc20_address: Address,
    pub erc20_template_address: Address,
    pub root_erc721_predicate_address: Address,
    pub root_erc721_address: Address,
    pub root_erc721_template_address: Address,
    pub root_erc1155_predicate_address: Address,
    pub root_erc1155_address: Address,
    pub erc1155_template_address: Address,
    pub custom_supernet_manager_address: Address,
    pub stake_manager_address: Address,
}

impl RootchainConfig {
    /// Project onto the persisted [`BridgeConfig`].
    ///
    /// Precompile and template addresses are dropped and
    /// `event_tracker_start_blocks` is left empty. Values are copied as is,
    /// zero addresses included.
    pub fn to_bridge_config(&self) -> BridgeConfig {
        BridgeConfig {
            json_rpc_endpoint: self.json_rpc_addr.clone(),

            state_sender_addr: self.state_sender_address,
            checkpoint_manager_addr: self.checkpoint_manager_address,
            exit_helper_addr: self.exit_helper_address,
            root_erc20_predicate_addr: self.root_erc20_predicate_address,
            root_native_erc20_addr: self.root_native_erc20_address,
            root_erc721_addr: self.root_erc721_address,
            root_erc721_predicate_addr: self.root_erc721_predicate_address,
            root_erc1155_addr: self.root_erc1155_address,
            root_erc1155_predicate_addr: self.root_erc1155_predicate_address,
            custom_supernet_manager_addr: self.custom_supernet_manager_address,
            stake_manager_addr: self.stake_manager_address,

            event_tracker_start_blocks: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn addr(byte: u8) -> Address {
        Address::new([byte; 20])
    }

    fn rootchain() -> RootchainConfig {
        RootchainConfig {
            json_rpc_addr: "http://127.0.0.1:8545".to_string(),
            state_sender_address: addr(1),
            checkpoint_manager_address: addr(2),
            bls_address: addr(3),
            bn256g2_address: addr(4),
            exit_helper_address: addr(5),
            root_erc20_predicate_address: addr(6),
            root_native_erc20_address: addr(7),
            erc20_template_address: addr(8),
            root_erc721_predicate_address: addr(9),
            root_erc721_address: addr(10),
            root_erc721_template_address: addr(11),
            root_erc1155_predicate_address: addr(12),
            root_erc1155_address: addr(13),
            erc1155_template_address: addr(14),
            custom_supernet_manager_address: addr(15),
            stake_manager_address: addr(16),
        }
    }

    #[test]
    fn projection_copies_shared_fields() {
        let bridge = rootchain().to_bridge_config();

        assert_eq!(
            bridge,
            BridgeConfig {
                state_sender_addr: addr(1),
                checkpoint_manager_addr: addr(2),
                exit_helper_addr: addr(5),
                root_erc20_predicate_addr: addr(6),
                root_native_erc20_addr: addr(7),
                root_erc721_addr: addr(10),
                root_erc721_predicate_addr: addr(9),
                root_erc1155_addr: addr(13),
                root_erc1155_predicate_addr: addr(12),
                custom_supernet_manager_addr: addr(15),
                stake_manager_addr: addr(16),
                json_rpc_endpoint: "http://127.0.0.1:8545".to_string(),
                event_tracker_start_blocks: BTreeMap::new(),
            }
        );
    }

    #[test]
    fn projection_propagates_zero_addresses() {
        let bridge = RootchainConfig::default().to_bridge_config();
        assert_eq!(bridge, BridgeConfig::default());
        assert!(bridge.state_sender_addr.is_zero());
    }

    #[test]
    fn projection_drops_runtime_only_addresses() {
        let bridge = rootchain().to_bridge_config();
        let value = serde_json::to_value(&bridge).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 13);

        for runtime_only in [addr(3), addr(4), addr(8), addr(11), addr(14)] {
            let text = runtime_only.to_string();
            assert!(object.values().all(|v| v != &json!(text)));
        }
    }

    #[test]
    fn event_tracker_start_blocks_keyed_by_address() {
        let value = json!({
            "stateSenderAddress": addr(1).to_string(),
            "jsonRPCEndpoint": "http://localhost:8545",
            "eventTrackerStartBlocks": {
                (addr(1).to_string()): 42,
            },
        });

        let bridge: BridgeConfig = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(bridge.event_tracker_start_blocks.get(&addr(1)), Some(&42));
        assert_eq!(bridge.checkpoint_manager_addr, Address::ZERO);

        let encoded = serde_json::to_value(&bridge).unwrap();
        assert_eq!(
            encoded["eventTrackerStartBlocks"],
            value["eventTrackerStartBlocks"]
        );
    }

    #[test]
    fn null_event_tracker_start_blocks() {
        let bridge: BridgeConfig =
            serde_json::from_value(json!({ "eventTrackerStartBlocks": null })).unwrap();
        assert!(bridge.event_tracker_start_blocks.is_empty());
    }

    #[test]
    fn bridge_setting_from_null() {
        let setting: BridgeSetting = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(setting, BridgeSetting::Disabled);
        assert_eq!(serde_json::to_value(&setting).unwrap(), json!(null));

        let setting: BridgeSetting = serde_json::from_value(json!({})).unwrap();
        assert!(setting.is_enabled());
        assert_eq!(setting.as_enabled(), Some(&BridgeConfig::default()));
    }
}
