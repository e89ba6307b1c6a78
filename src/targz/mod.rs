//! Streaming size computation for gzip-compressed tar archives.
//!
//! ## Architecture
//!
//! Every archive runs through its own three-stage pipeline:
//!
//! - [`extractor`]: opens the file, decompresses it and walks the tar
//!   headers on a blocking thread, sending one [`Entry`] per member
//! - [`aggregator`]: folds entry sizes into the running total and snapshots
//!   it into a [`ProgressRecord`] per entry
//! - [`reporter`]: renders progress records as a single overwritten status
//!   line
//!
//! [`pipeline`] wires the stages together with bounded queues, waits for the
//! downstream stages to drain and only then looks at the extractor's result.
//! Archives are processed one after another, sharing a single running total.

mod aggregator;
mod extractor;
mod pipeline;
mod reporter;
mod structures;

#[cfg(test)]
pub(crate) mod fixtures;

pub use aggregator::aggregate;
pub use extractor::extract_entries;
pub use pipeline::{DEFAULT_BUFFER, PipelineOptions, process_all, process_file, process_file_with};
pub use reporter::report;
pub use structures::{Entry, ProgressRecord};
