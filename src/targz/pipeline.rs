use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use num_bigint::BigUint;
use tokio::io::AsyncWrite;
use tokio::sync::mpsc;
use tokio::task;
use tracing::{debug, info};

use super::aggregator::aggregate;
use super::extractor::extract_entries;
use super::reporter::report;
use crate::error::PipelineError;

/// Default capacity of the queues between stages.
pub const DEFAULT_BUFFER: usize = 100;

/// Per-run switches shared by every archive.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Suppress progress records and the per-archive notice
    pub silent: bool,
    /// Render totals in human byte units
    pub human: bool,
    /// Queue capacity between stages, values below 1 are treated as 1
    pub buffer: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            silent: false,
            human: false,
            buffer: DEFAULT_BUFFER,
        }
    }
}

/// Add the unpacked size of the archive at `path` to `total`.
///
/// Status lines go to stderr. See [`process_file_with`].
pub async fn process_file(
    path: &Path,
    total: &mut BigUint,
    options: &PipelineOptions,
) -> Result<(), PipelineError> {
    process_file_with(path, total, options, tokio::io::stderr()).await
}

/// Run the extract/aggregate/report pipeline for one archive.
///
/// `total` is lent to the aggregator for the duration of the run and written
/// back once it has drained. The extractor's outcome is only inspected after
/// both the aggregator and the reporter finished, so on error `total` already
/// contains every entry read before the failure.
pub async fn process_file_with<W>(
    path: &Path,
    total: &mut BigUint,
    options: &PipelineOptions,
    status: W,
) -> Result<(), PipelineError>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    let capacity = options.buffer.max(1);
    let (entry_tx, entry_rx) = mpsc::channel(capacity);
    let (line_tx, line_rx) = mpsc::channel(capacity);

    let archive: PathBuf = path.to_path_buf();
    let extractor = task::spawn_blocking(move || extract_entries(&archive, entry_tx));
    let aggregator = tokio::spawn(aggregate(
        std::mem::take(total),
        entry_rx,
        line_tx,
        options.silent,
    ));
    let reporter = tokio::spawn(report(line_rx, status, options.human));

    let (folded, rendered) = tokio::join!(aggregator, reporter);
    *total = folded?;
    let rendered = rendered?;
    debug!(path = %path.display(), lines = rendered, "archive drained");

    extractor.await??;
    Ok(())
}

/// Measure `paths` in order and return the combined unpacked size.
///
/// Stops at the first archive that fails; later paths are never opened.
pub async fn process_all(paths: &[PathBuf], options: &PipelineOptions) -> Result<BigUint> {
    let mut total = BigUint::default();

    for path in paths {
        if !options.silent {
            info!("Reading {}", path.display());
        }
        process_file(path, &mut total, options)
            .await
            .with_context(|| format!("Error processing {}", path.display()))?;
    }

    Ok(total)
}
