use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrtshError {
    #[error("No queries provided, use either -q or -f!")]
    NoQueries,

    #[error("failed to read query file {}: {source}", path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output file {}: {source}", path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed crt.sh response: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CrtshError>;
