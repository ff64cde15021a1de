use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse delimited text: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
