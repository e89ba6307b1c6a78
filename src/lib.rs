//! # targzsize
//!
//! Compute the total unpacked size of one or more `.tar.gz` archives.
//!
//! Each archive is streamed through a three-stage pipeline: a blocking
//! extractor that decompresses and walks the tar headers, an aggregator that
//! folds entry sizes into an arbitrary-precision running total, and a
//! reporter that renders the running total as a single overwritten status
//! line. Nothing is ever written to disk and no entry content is buffered.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use targzsize::{PipelineOptions, process_all, total_to_string};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let paths = vec![PathBuf::from("release.tar.gz")];
//!     let options = PipelineOptions { silent: true, ..Default::default() };
//!
//!     let total = process_all(&paths, &options).await?;
//!     println!("{}", total_to_string(&total, true));
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod notices;
pub mod targz;
pub mod units;

pub use cli::Cli;
pub use error::{ExtractError, PipelineError};
pub use notices::NOTICES;
pub use targz::{
    Entry, PipelineOptions, ProgressRecord, aggregate, extract_entries, process_all,
    process_file, process_file_with, report,
};
pub use units::total_to_string;
