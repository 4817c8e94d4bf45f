use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a JSON document for one of the operations.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
