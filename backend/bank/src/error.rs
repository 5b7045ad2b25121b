use std::{io, path::PathBuf};

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Failed to access recipe bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed recipe bank: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to fetch recipes ({0})")]
    Status(StatusCode),
}
