use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file is not valid JSON. The parser's message carries line and column.
    #[error("failed to parse JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Unexpected(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MigrateError>;
