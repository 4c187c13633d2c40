//! Extracts the PolyBFT engine configuration from a chain genesis document.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

pub use polybft_types::{ConsensusConfig, CONSENSUS_NAME};

mod error;
mod genesis;

pub use error::Error;
pub use genesis::{ChainParams, FileImporter, GenesisDocument, GenesisImporter};

/// Load the genesis file at `path` and return the PolyBFT configuration
/// together with the chain ID declared by the document.
pub fn load_polybft_config(path: impl AsRef<Path>) -> Result<(ConsensusConfig, i64), Error> {
    load_polybft_config_with(&FileImporter, path)
}

/// Same as [`load_polybft_config`], reading the document through `importer`.
pub fn load_polybft_config_with<I>(
    importer: &I,
    path: impl AsRef<Path>,
) -> Result<(ConsensusConfig, i64), Error>
where
    I: GenesisImporter + ?Sized,
{
    let path = path.as_ref();
    let genesis = importer.import(path)?;
    let config = get_polybft_config(&genesis)?;

    debug!(
        path = %path.display(),
        chain_id = genesis.chain_id(),
        "Loaded {CONSENSUS_NAME} configuration"
    );

    Ok((config, genesis.chain_id()))
}

/// Deserialize the PolyBFT configuration from an already parsed genesis document.
pub fn get_polybft_config(genesis: &GenesisDocument) -> Result<ConsensusConfig, Error> {
    let raw = genesis
        .engine(CONSENSUS_NAME)
        .filter(|raw| !raw.is_null())
        .ok_or_else(|| Error::MissingEngine(CONSENSUS_NAME.to_string()))?;

    // The engine map holds opaque JSON; decode the typed model straight from it.
    ConsensusConfig::deserialize(raw).map_err(|source| Error::Deserialize {
        engine: CONSENSUS_NAME.to_string(),
        source,
    })
}
