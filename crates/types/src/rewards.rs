use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::numeric::{encode_big_uint, parse_big_uint, ParseBigUintError};
use crate::Address;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RewardsConfigError {
    #[error("missing field `rewardWalletAmount`")]
    MissingWalletAmount,

    #[error("invalid `rewardWalletAmount`: {0}")]
    WalletAmount(#[from] ParseBigUintError),
}

/// Epoch reward distribution settings.
///
/// On the wire the wallet amount is a hex string under `rewardWalletAmount`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RawRewardsConfig", try_from = "RawRewardsConfig")]
pub struct RewardsConfig {
    /// Address of the reward token on the child chain
    pub token_address: Address,

    /// Address of the reward wallet on the child chain
    pub wallet_address: Address,

    /// Amount of tokens held by the reward wallet
    pub wallet_amount: BigUint,
}

/// Wire representation of [`RewardsConfig`].
#[derive(Serialize, Deserialize)]
struct RawRewardsConfig {
    #[serde(rename = "rewardTokenAddress", default)]
    token_address: Address,

    #[serde(rename = "rewardWalletAddress", default)]
    wallet_address: Address,

    #[serde(rename = "rewardWalletAmount", default)]
    wallet_amount: Option<String>,
}

impl From<RewardsConfig> for RawRewardsConfig {
    fn from(config: RewardsConfig) -> Self {
        Self {
            token_address: config.token_address,
            wallet_address: config.wallet_address,
            wallet_amount: Some(encode_big_uint(&config.wallet_amount)),
        }
    }
}

impl TryFrom<RawRewardsConfig> for RewardsConfig {
    type Error = RewardsConfigError;

    fn try_from(raw: RawRewardsConfig) -> Result<Self, Self::Error> {
        let wallet_amount = raw
            .wallet_amount
            .ok_or(RewardsConfigError::MissingWalletAmount)?;

        Ok(Self {
            token_address: raw.token_address,
            wallet_address: raw.wallet_address,
            wallet_amount: parse_big_uint(&wallet_amount)?,
        })
    }
}
