//! Histogram computation for entropy-source sample files.
//!
//! The pipeline runs in sequential phases with a hard barrier between each:
//!
//! ```text
//! Load -> Partition -> Parse (parallel) -> EstimateRange
//!      -> Bin (parallel) -> Merge -> [Smooth] -> Histogram
//! ```
//!
//! The input buffer is split into line-aligned chunks, one per worker.
//! Workers parse and later bin their own chunk with no shared mutable state;
//! the only shared object is the read-only byte buffer. Range estimation is
//! a single-threaded reduction over the parsed values using partial
//! selection, so no full sort is ever performed.

mod bins;
mod chunks;
mod config;
mod engine;
mod parse;
mod range;
mod smooth;

pub use config::HistogramConfig;
pub use engine::{
    compute_histogram, compute_histogram_with, try_compute_histogram, try_compute_histogram_with,
    SampleFileError,
};

pub(crate) use bins::{bin_chunk, merge_bins};
pub(crate) use chunks::partition_lines;
pub(crate) use parse::parse_chunk;
pub(crate) use range::percentile_trimmed_range;
pub(crate) use smooth::gaussian_smooth;

/// Number of bins used when none is configured.
///
/// Chosen for on-screen plotting resolution; one bin per horizontal pixel
/// band at typical plot widths.
pub const DEFAULT_BIN_COUNT: usize = 1500;

// =============================================================================
// Histogram
// =============================================================================

/// A fixed-resolution histogram over a padded, percentile-trimmed value range.
///
/// # Invariants
///
/// - `bin_counts.len() == bin_count`, always.
/// - `bin_width == (max_value - min_value) / bin_count` when
///   `max_value > min_value`; the zero histogram has `bin_width == 0.0`.
/// - Every count is non-negative. For a raw (pre-smoothing) histogram the
///   counts sum to at most the number of successfully parsed samples,
///   strictly less only when values fell outside the padded range. The
///   smoothed rendering variant redistributes mass and may exceed that
///   bound slightly near the array edges (see [`Histogram::smoothed`]).
///
/// A `Histogram` is handed to the caller by value and shares no buffers with
/// the engine. The four scalar fields plus the bin array round-trip through
/// [`HistogramSnapshot`](crate::persist::HistogramSnapshot) without loss.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub(crate) bin_count: usize,
    pub(crate) min_value: i64,
    pub(crate) max_value: i64,
    pub(crate) bin_width: f64,
    pub(crate) bin_counts: Vec<i64>,
}

impl Histogram {
    /// The zero histogram: the well-defined "nothing to show" result.
    ///
    /// Returned for a missing file, a file with no parseable lines, or a
    /// degenerate (collapsed) percentile range.
    pub fn zero(bin_count: usize) -> Self {
        Self {
            bin_count,
            min_value: 0,
            max_value: 0,
            bin_width: 0.0,
            bin_counts: vec![0; bin_count],
        }
    }

    /// Assemble a histogram from merged bin counts.
    ///
    /// # Panics
    ///
    /// Panics if `bin_counts.len() != bin_count` or `min_value >= max_value`;
    /// both are ruled out upstream by the range estimator and the merger.
    pub(crate) fn from_parts(
        bin_count: usize,
        min_value: i64,
        max_value: i64,
        bin_counts: Vec<i64>,
    ) -> Self {
        assert_eq!(bin_counts.len(), bin_count, "bin count invariant violated");
        assert!(min_value < max_value, "range must be non-degenerate");
        // The range can span more than the i64 domain when the padded
        // bounds saturate, so the width is taken through i128.
        let bin_width = (max_value as i128 - min_value as i128) as f64 / bin_count as f64;
        Self {
            bin_count,
            min_value,
            max_value,
            bin_width,
            bin_counts,
        }
    }

    /// Number of bins.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Lower bound of the binned range (after percentile trim and padding).
    #[inline]
    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    /// Upper bound of the binned range (after percentile trim and padding).
    #[inline]
    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    /// Width of one bin in value units.
    #[inline]
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Per-bin sample counts.
    #[inline]
    pub fn bin_counts(&self) -> &[i64] {
        &self.bin_counts
    }

    /// Sum of all bin counts.
    pub fn total_count(&self) -> i64 {
        self.bin_counts.iter().sum()
    }

    /// `true` when every bin is zero (the UI treats this as "no data").
    pub fn is_zero(&self) -> bool {
        self.bin_counts.iter().all(|&c| c == 0)
    }

    /// The half-open value interval `[lo, hi)` covered by bin `index`.
    ///
    /// Used to map a selected bin span back to sample values when a
    /// sub-range is extracted for re-testing. Returns `None` for an
    /// out-of-bounds index or for the zero histogram.
    pub fn value_range_of_bin(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.bin_count || self.min_value >= self.max_value {
            return None;
        }
        let lo = self.min_value as f64 + index as f64 * self.bin_width;
        Some((lo, lo + self.bin_width))
    }

    /// Derive the rendering variant: Gaussian-smoothed bin counts.
    ///
    /// Smoothing is lossy (weighted averages are truncated back to integer
    /// counts) and intentionally reshapes the displayed distribution for
    /// readability. Boundary windows renormalize over fewer neighbors, so
    /// mass near the array edges can even be inflated slightly. The scalars
    /// are unchanged; keep `self` around when exact counts are needed.
    pub fn smoothed(&self, sigma: f64) -> Histogram {
        Histogram {
            bin_count: self.bin_count,
            min_value: self.min_value,
            max_value: self.max_value,
            bin_width: self.bin_width,
            bin_counts: gaussian_smooth(&self.bin_counts, sigma),
        }
    }
}
