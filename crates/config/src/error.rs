use std::path::PathBuf;

/// Errors returned while loading the consensus configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Genesis file could not be read
    #[error("Error reading genesis file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Genesis document is not valid JSON or lacks its `params` section
    #[error("Malformed genesis document: {0}")]
    Document(#[source] serde_json::Error),

    /// No configuration registered for the engine, or it is `null`
    #[error("Genesis document has no `{0}` engine configuration")]
    MissingEngine(String),

    /// The engine configuration does not match the expected shape
    #[error("Invalid `{engine}` engine configuration: {source}")]
    Deserialize {
        engine: String,
        source: serde_json::Error,
    },
}
