use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::Receiver;
use tracing::warn;

use super::structures::ProgressRecord;
use crate::units::total_to_string;

/// ANSI "erase line" followed by a carriage return.
const CLEAR_LINE: &str = "\x1b[2K\r";

/// Render every progress record to `writer`, each one replacing the last.
///
/// Lines look like `<total> "<path>"`. Once input is exhausted a newline is
/// written if anything was shown. A write failure stops rendering but the
/// input is still drained so the aggregator never stalls.
///
/// Returns the number of lines rendered.
pub async fn report<W>(mut records: Receiver<ProgressRecord>, mut writer: W, human: bool) -> usize
where
    W: AsyncWrite + Unpin,
{
    let mut rendered = 0;
    let mut broken = false;

    while let Some(record) = records.recv().await {
        if broken {
            continue;
        }

        let line = format!(
            "{CLEAR_LINE}{} {:?}",
            total_to_string(&record.total, human),
            record.path
        );
        if let Err(err) = write_flush(&mut writer, line.as_bytes()).await {
            warn!("unable to write status line: {err}");
            broken = true;
            continue;
        }
        rendered += 1;
    }

    if rendered > 0
        && !broken
        && let Err(err) = write_flush(&mut writer, b"\n").await
    {
        warn!("unable to finish status line: {err}");
    }

    rendered
}

async fn write_flush<W: AsyncWrite + Unpin>(writer: &mut W, bytes: &[u8]) -> std::io::Result<()> {
    writer.write_all(bytes).await?;
    writer.flush().await
}
