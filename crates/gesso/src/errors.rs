//! Command errors.

use std::path::PathBuf;

use gesso_atelier::AtelierError;
use gesso_graft::GraftError;
use gesso_relief::AttrError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: {source}", path.display())]
    Attributes { path: PathBuf, source: AttrError },

    #[error(transparent)]
    Merge(#[from] AttrError),

    #[error(transparent)]
    Graft(#[from] GraftError),

    #[error(transparent)]
    Atelier(#[from] AtelierError),

    #[error("{0}")]
    Usage(String),
}
