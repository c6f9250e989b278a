use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status {status} fetching {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read package tree {path}: {source}")]
    Tree {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
