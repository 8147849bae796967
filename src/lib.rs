//! samplehist: an outlier-robust histogram engine for entropy-source sample files.
//!
//! Ingests a large newline-delimited file of integer samples and produces a
//! fixed-resolution histogram suitable for plotting and for selecting
//! sub-ranges to re-test. The value range is derived from the 1st/99th
//! percentiles rather than the true min/max, then padded, so a handful of
//! pathological outliers cannot dominate the bin width.
//!
//! # Key Types
//!
//! - [`compute_histogram`] / [`compute_histogram_with`] - The engine entry points
//! - [`Histogram`] - The finished result, with exact per-bin counts
//! - [`HistogramConfig`] - Configuration builder (bin count, percentiles, smoothing)
//! - [`HistogramSnapshot`] - Serializable form for project persistence
//!
//! # Pipeline
//!
//! `Load -> Partition -> Parse (parallel) -> EstimateRange -> Bin (parallel)
//! -> Merge -> [Smooth]`. Each phase is a hard barrier; the call is
//! synchronous and deterministic for a fixed file and worker count.
//!
//! # Failure Contract
//!
//! The engine always returns something renderable: a missing file, a file
//! with no parseable lines, or a collapsed percentile range all yield the
//! zero histogram rather than an error. Use [`try_compute_histogram`] when
//! the caller wants to surface I/O problems.

pub mod histogram;
pub mod persist;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Engine entry points and result type
pub use histogram::{
    compute_histogram, compute_histogram_with, try_compute_histogram, try_compute_histogram_with,
    Histogram, HistogramConfig, SampleFileError, DEFAULT_BIN_COUNT,
};

// Persistence snapshot contract
pub use persist::{HistogramSnapshot, SnapshotError};

// Shared utilities
pub use utils::{run_with_threads, Parallelism};
