//! Blocking half of the pipeline: gzip + tar decoding.
//!
//! `flate2` and `tar` only offer synchronous readers, so this stage runs on a
//! blocking thread and hands entries to the async side with
//! [`Sender::blocking_send`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::bufread::MultiGzDecoder;
use tar::{Archive, EntryType};
use tokio::sync::mpsc::Sender;
use tracing::debug;

use super::structures::Entry;
use crate::error::ExtractError;

/// Stream every member of the tar.gz archive at `path` into `entries`.
///
/// One [`Entry`] is sent per member, in archive order. Only regular files
/// carry their declared size. The channel is closed when this returns,
/// whatever the outcome, and the archive file is released on every path.
///
/// Must not be called from within an async context.
pub fn extract_entries(path: &Path, entries: Sender<Entry>) -> Result<(), ExtractError> {
    let file = File::open(path).map_err(|source| ExtractError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    // Pull the first decompressed block so a bad gzip header surfaces before
    // anything reaches the aggregator.
    let mut reader = BufReader::new(MultiGzDecoder::new(BufReader::new(file)));
    if let Err(err) = reader.fill_buf() {
        return Err(if reader.get_ref().header().is_some() {
            ExtractError::Entry(err)
        } else {
            ExtractError::GzipHeader(err)
        });
    }

    let mut archive = Archive::new(reader);
    let members = archive.entries().map_err(ExtractError::ReaderCreation)?;

    for member in members {
        let member = member.map_err(ExtractError::Entry)?;

        let name = member.path_bytes();
        let path = String::from_utf8_lossy(&name).into_owned();
        let size = if is_regular_file(member.header(), &name) {
            member.size()
        } else {
            0
        };

        if entries.blocking_send(Entry { path, size }).is_err() {
            debug!("entry receiver closed, stopping early");
            break;
        }
    }

    Ok(())
}

/// Old-style archives mark regular files with a NUL type flag and rely on a
/// trailing slash to mark directories.
fn is_regular_file(header: &tar::Header, name: &[u8]) -> bool {
    if header.entry_type() != EntryType::Regular {
        return false;
    }
    !(header.as_old().linkflag[0] == 0 && name.ends_with(b"/"))
}
