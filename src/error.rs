use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SraFetchError {
    #[error("invalid SRA accession: {0:?}")]
    InvalidAccession(String),

    #[error("failed to read manifest at {0}")]
    ManifestRead(PathBuf),

    #[error("manifest is missing required column {0:?}")]
    MissingColumn(String),

    #[error("failed to parse manifest: {0}")]
    ManifestParse(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("required tool not found: {0}")]
    MissingTool(String),

    #[error("fetch failed for {accession}: {message}")]
    FetchFailed { accession: String, message: String },
}
