//! The engine entry points and phase sequencing.
//!
//! `compute_histogram` is a pure function from a file path to a
//! [`Histogram`]: synchronous, blocking, no side effects beyond the read.
//! The call is a single unit of work; callers that need a responsive UI
//! submit the whole call to a background worker and observe completion
//! through whatever mechanism that pool provides.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{
    bin_chunk, gaussian_smooth, merge_bins, parse_chunk, partition_lines,
    percentile_trimmed_range, Histogram, HistogramConfig,
};
use crate::utils::{run_with_threads, Parallelism};

// =============================================================================
// Errors
// =============================================================================

/// Failure to load a sample file.
///
/// Data-quality problems (malformed lines, degenerate ranges) never raise;
/// they degrade to the zero histogram. Only the initial read can fail.
#[derive(Debug, Error)]
pub enum SampleFileError {
    /// The sample file does not exist.
    #[error("sample file not found: {0}")]
    NotFound(PathBuf),

    /// The sample file exists but could not be read.
    #[error("failed to read sample file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Entry Points
// =============================================================================

/// Compute a histogram from a newline-delimited sample file.
///
/// Total function: a missing/unreadable file, a file with no parseable
/// lines, and a degenerate value range all yield the zero histogram, so the
/// caller always has something renderable. Use [`try_compute_histogram`] to
/// observe I/O failures.
pub fn compute_histogram(path: impl AsRef<Path>) -> Histogram {
    compute_histogram_with(path, &HistogramConfig::default())
}

/// [`compute_histogram`] with an explicit configuration.
pub fn compute_histogram_with(path: impl AsRef<Path>, config: &HistogramConfig) -> Histogram {
    try_compute_histogram_with(path, config)
        .unwrap_or_else(|_| Histogram::zero(config.bin_count))
}

/// Compute a histogram, surfacing I/O failures to the caller.
///
/// Parse skips and degenerate ranges still degrade to the zero histogram;
/// only the file read itself is fallible.
pub fn try_compute_histogram(path: impl AsRef<Path>) -> Result<Histogram, SampleFileError> {
    try_compute_histogram_with(path, &HistogramConfig::default())
}

/// [`try_compute_histogram`] with an explicit configuration.
pub fn try_compute_histogram_with(
    path: impl AsRef<Path>,
    config: &HistogramConfig,
) -> Result<Histogram, SampleFileError> {
    let buffer = read_sample_file(path.as_ref())?;
    Ok(run_with_threads(config.n_threads, |parallelism| {
        compute_from_bytes(&buffer, config, parallelism)
    }))
}

// =============================================================================
// Pipeline
// =============================================================================

/// Load the whole file into memory. The buffer is owned by this computation
/// and released when the engine call returns.
fn read_sample_file(path: &Path) -> Result<Vec<u8>, SampleFileError> {
    std::fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => SampleFileError::NotFound(path.to_path_buf()),
        _ => SampleFileError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Run the phase sequence over an in-memory buffer.
///
/// Each phase is a hard barrier: parsing joins before range estimation,
/// binning joins before the merge. All mutable state is chunk-local until
/// its join point, so no locks are needed anywhere.
fn compute_from_bytes(
    buffer: &[u8],
    config: &HistogramConfig,
    parallelism: Parallelism,
) -> Histogram {
    let workers = if parallelism.is_parallel() {
        rayon::current_num_threads().max(1)
    } else {
        1
    };

    // Partition: resolve line-aligned chunk boundaries once, up front.
    let chunks = partition_lines(buffer, workers);

    // Parse (parallel fan-out, joined by the collect inside maybe_par_map).
    let sample_sets: Vec<Vec<i64>> =
        parallelism.maybe_par_map(&chunks, |chunk| parse_chunk(&buffer[chunk.range()]));

    let total_samples: usize = sample_sets.iter().map(Vec::len).sum();
    if total_samples == 0 {
        return Histogram::zero(config.bin_count);
    }

    // Estimate range: single-threaded reduction. Selection reorders its
    // input, so it runs on a scratch copy and the per-chunk sequences stay
    // intact for the binning pass.
    let mut scratch = Vec::with_capacity(total_samples);
    for set in &sample_sets {
        scratch.extend_from_slice(set);
    }
    let Some((min_value, max_value)) = percentile_trimmed_range(
        &mut scratch,
        config.lower_percentile,
        config.upper_percentile,
        config.padding_fraction,
    ) else {
        return Histogram::zero(config.bin_count);
    };
    drop(scratch);

    // Bin (parallel fan-out over the same partition, reused not re-parsed),
    // then merge.
    let local_bins: Vec<Vec<i64>> = parallelism.maybe_par_map(&sample_sets, |set| {
        bin_chunk(set, min_value, max_value, config.bin_count)
    });
    let merged = merge_bins(local_bins, config.bin_count);

    let counts = if config.smoothing {
        gaussian_smooth(&merged, config.smoothing_sigma)
    } else {
        merged
    };
    Histogram::from_parts(config.bin_count, min_value, max_value, counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute_bytes(buffer: &[u8], config: &HistogramConfig) -> Histogram {
        run_with_threads(config.n_threads, |p| {
            compute_from_bytes(buffer, config, p)
        })
    }

    #[test]
    fn test_empty_buffer_yields_zero_histogram() {
        let hist = compute_bytes(b"", &HistogramConfig::default());
        assert!(hist.is_zero());
        assert_eq!(hist.min_value(), 0);
        assert_eq!(hist.max_value(), 0);
    }

    #[test]
    fn test_garbage_only_yields_zero_histogram() {
        let hist = compute_bytes(
            b"not a number\nstill not\n###\n",
            &HistogramConfig::default(),
        );
        assert!(hist.is_zero());
    }

    #[test]
    fn test_all_samples_counted_when_in_range() {
        let data: Vec<u8> = (1..=100)
            .map(|i| format!("{i}\n"))
            .collect::<String>()
            .into_bytes();
        let hist = compute_bytes(&data, &HistogramConfig::default());
        // Padding only expands the range, so nothing is dropped.
        assert_eq!(hist.total_count(), 100);
        assert_eq!(hist.min_value(), -4);
        assert_eq!(hist.max_value(), 104);
    }

    #[test]
    fn test_sequential_matches_parallel() {
        let data: Vec<u8> = (0..5000)
            .map(|i| format!("{}\n", (i * 31) % 997))
            .collect::<String>()
            .into_bytes();
        let seq = compute_bytes(&data, &HistogramConfig::builder().n_threads(1).build());
        let par = compute_bytes(&data, &HistogramConfig::builder().n_threads(4).build());
        assert_eq!(seq, par);
    }

    #[test]
    fn test_smoothing_config_applies_rendering_variant() {
        let data: Vec<u8> = std::iter::repeat("500\n")
            .take(50)
            .chain(std::iter::once("1\n"))
            .chain(std::iter::once("1000\n"))
            .collect::<String>()
            .into_bytes();
        let raw = compute_bytes(&data, &HistogramConfig::default());
        let smoothed = compute_bytes(
            &data,
            &HistogramConfig::builder().smoothing(true).build(),
        );
        assert_eq!(raw.min_value(), smoothed.min_value());
        assert_eq!(raw.max_value(), smoothed.max_value());
        assert_ne!(raw.bin_counts(), smoothed.bin_counts());
        // The 1000 sits past the padded 99th percentile and is dropped;
        // the other 51 samples are counted exactly in the raw variant.
        assert_eq!(raw.total_count(), 51);
    }
}
