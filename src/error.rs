use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal failure of the extractor for a single archive.
///
/// At most one of these is produced per archive; entries seen before it was
/// raised have already been folded into the running total.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unable to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to create gzip reader")]
    GzipHeader(#[source] io::Error),

    #[error("Unable to create tar reader")]
    ReaderCreation(#[source] io::Error),

    #[error("Error scanning tarfile")]
    Entry(#[source] io::Error),
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("pipeline worker failed")]
    Join(#[from] tokio::task::JoinError),
}

impl PipelineError {
    /// The extractor failure behind this error, if that is what it is.
    pub fn as_extract(&self) -> Option<&ExtractError> {
        match self {
            PipelineError::Extract(err) => Some(err),
            PipelineError::Join(_) => None,
        }
    }
}
