use num_bigint::BigUint;

/// One member of a tar archive as seen by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Member name as stored in the archive (long names already applied)
    pub path: String,
    /// Declared size for regular files, 0 for every other member type
    pub size: u64,
}

impl Entry {
    pub fn new(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

/// Snapshot of the running total right after one entry was folded in.
///
/// `total` is an owned copy, later additions never change a record that was
/// already sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    pub path: String,
    pub total: BigUint,
}
