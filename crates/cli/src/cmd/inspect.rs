use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use serde_json::{json, Value};
use tracing::info;

use polybft_config::CONSENSUS_NAME;

#[derive(Parser, Clone, Debug)]
pub struct InspectCmd {
    /// Path to the chain genesis document
    #[arg(long, value_name = "GENESIS_FILE")]
    pub genesis: PathBuf,
}

impl InspectCmd {
    /// Print the configuration summary to stdout.
    pub fn run(&self) -> Result<()> {
        let summary = summarize(&self.genesis)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

/// Load the PolyBFT configuration of the genesis document at `path` and
/// summarize it as `{ "chainID", "bridgeEnabled", "polybft" }`.
pub fn summarize(path: &Path) -> Result<Value> {
    let (config, chain_id) = polybft_config::load_polybft_config(path)
        .wrap_err_with(|| format!("Failed to load genesis at {}", path.display()))?;

    info!(
        chain_id,
        bridge = config.is_bridge_enabled(),
        validators = config.initial_validator_set.len(),
        "Loaded {CONSENSUS_NAME} configuration from {}",
        path.display()
    );

    Ok(json!({
        "chainID": chain_id,
        "bridgeEnabled": config.is_bridge_enabled(),
        (CONSENSUS_NAME): serde_json::to_value(&config)?,
    }))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn genesis_file(engine: Value) -> NamedTempFile {
        let genesis = json!({
            "name": "polybft-test",
            "params": { "chainID": 100, "engine": engine },
        });

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{genesis}").unwrap();
        file
    }

    #[test]
    fn summary_without_bridge() {
        let file = genesis_file(json!({
            "polybft": { "epochSize": 10, "sprintSize": 5, "blockTime": "2s" }
        }));

        let summary = summarize(file.path()).unwrap();

        assert_eq!(summary["chainID"], json!(100));
        assert_eq!(summary["bridgeEnabled"], json!(false));
        assert_eq!(summary["polybft"]["epochSize"], json!(10));
        assert_eq!(summary["polybft"]["sprintSize"], json!(5));
        assert_eq!(summary["polybft"]["bridge"], Value::Null);
    }

    #[test]
    fn summary_with_bridge() {
        let file = genesis_file(json!({
            "polybft": {
                "bridge": { "jsonRPCEndpoint": "http://127.0.0.1:8545" }
            }
        }));

        let summary = summarize(file.path()).unwrap();

        assert_eq!(summary["bridgeEnabled"], json!(true));
        assert_eq!(
            summary["polybft"]["bridge"]["jsonRPCEndpoint"],
            json!("http://127.0.0.1:8545")
        );
    }

    #[test]
    fn missing_engine_fails() {
        let file = genesis_file(json!({ "ibft": {} }));
        let err = summarize(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load genesis"));
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(summarize(&dir.path().join("genesis.json")).is_err());
    }
}
