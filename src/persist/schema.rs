//! Schema type for persisted histogram snapshots.

use serde::{Deserialize, Serialize};

/// Serializable form of a computed histogram.
///
/// Field names are part of the stored format; counts are exact (pre-smoothing
/// when the caller wants to re-derive the rendering variant later).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramSnapshot {
    /// Number of bins the histogram was computed with.
    pub bin_count: usize,
    /// Lower bound of the padded value range.
    pub min_value: i64,
    /// Upper bound of the padded value range.
    pub max_value: i64,
    /// Width of one bin in value units.
    pub bin_width: f64,
    /// Per-bin sample counts; length must equal `bin_count`.
    pub bin_counts: Vec<i64>,
}
