use num_bigint::BigUint;
use tokio::sync::mpsc::{Receiver, Sender};
use tracing::debug;

use super::structures::{Entry, ProgressRecord};

/// Fold every entry from `entries` into `total` and hand the total back.
///
/// The running total is moved in for the lifetime of one archive and returned
/// once `entries` is closed, so no two aggregators ever share it. Unless
/// `silent` is set, a [`ProgressRecord`] is emitted after every addition.
/// `progress` is dropped on return, which closes the reporter's input.
pub async fn aggregate(
    mut total: BigUint,
    mut entries: Receiver<Entry>,
    progress: Sender<ProgressRecord>,
    silent: bool,
) -> BigUint {
    let mut progress = (!silent).then_some(progress);

    while let Some(entry) = entries.recv().await {
        total += entry.size;

        if let Some(lines) = &progress
            && lines
                .send(ProgressRecord {
                    path: entry.path,
                    total: total.clone(),
                })
                .await
                .is_err()
        {
            // Keep folding, the total must not depend on the reporter.
            debug!("progress receiver closed");
            progress = None;
        }
    }

    total
}
