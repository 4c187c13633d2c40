use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

/// A generic chain genesis document.
///
/// Only the parts needed to locate engine configurations are modelled,
/// everything else is kept as opaque JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenesisDocument {
    #[serde(default)]
    pub name: String,

    pub params: ChainParams,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainParams {
    #[serde(rename = "chainID", default)]
    pub chain_id: i64,

    /// Per-engine configuration, keyed by engine name
    #[serde(default)]
    pub engine: BTreeMap<String, Value>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl GenesisDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(bytes).map_err(Error::Document)
    }

    pub fn chain_id(&self) -> i64 {
        self.params.chain_id
    }

    /// Raw configuration registered under the given engine name.
    pub fn engine(&self, name: &str) -> Option<&Value> {
        self.params.engine.get(name)
    }
}

/// Turns a path into a parsed genesis document.
pub trait GenesisImporter {
    fn import(&self, path: &Path) -> Result<GenesisDocument, Error>;
}

/// Reads genesis documents as JSON files from the local filesystem.
#[derive(Copy, Clone, Debug, Default)]
pub struct FileImporter;

impl GenesisImporter for FileImporter {
    fn import(&self, path: &Path) -> Result<GenesisDocument, Error> {
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        GenesisDocument::from_slice(&bytes)
    }
}
