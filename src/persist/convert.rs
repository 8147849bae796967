//! Conversion between the runtime [`Histogram`] and its stored snapshot.

use thiserror::Error;

use super::schema::HistogramSnapshot;
use crate::histogram::Histogram;

/// Errors when reconstructing a histogram from a persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The stored bin array does not match the stored bin count.
    #[error("snapshot bin array length {got} does not match bin_count {expected}")]
    BinCountMismatch { expected: usize, got: usize },
}

impl Histogram {
    /// Capture the persistable state of this histogram.
    pub fn to_snapshot(&self) -> HistogramSnapshot {
        HistogramSnapshot {
            bin_count: self.bin_count,
            min_value: self.min_value,
            max_value: self.max_value,
            bin_width: self.bin_width,
            bin_counts: self.bin_counts.clone(),
        }
    }

    /// Reconstruct a histogram from a persisted snapshot.
    ///
    /// The stored `bin_width` is taken as-is rather than recomputed, so the
    /// reconstruction is bit-for-bit equal to the histogram that was saved.
    /// The bin array length is validated against the stored bin count.
    pub fn from_snapshot(snapshot: HistogramSnapshot) -> Result<Histogram, SnapshotError> {
        if snapshot.bin_counts.len() != snapshot.bin_count {
            return Err(SnapshotError::BinCountMismatch {
                expected: snapshot.bin_count,
                got: snapshot.bin_counts.len(),
            });
        }
        Ok(Histogram {
            bin_count: snapshot.bin_count,
            min_value: snapshot.min_value,
            max_value: snapshot.max_value,
            bin_width: snapshot.bin_width,
            bin_counts: snapshot.bin_counts,
        })
    }
}
