//! Engine configuration.

use bon::Builder;

use super::DEFAULT_BIN_COUNT;

/// Configuration for histogram computation.
///
/// Use the builder pattern for configuration:
///
/// ```
/// use samplehist::HistogramConfig;
///
/// // Defaults: 1500 bins, 1st/99th percentile trim, 5% padding, no smoothing
/// let config = HistogramConfig::default();
///
/// // Rendering variant on 4 threads
/// let config = HistogramConfig::builder()
///     .smoothing(true)
///     .n_threads(4)
///     .build();
/// ```
#[derive(Clone, Debug, Builder)]
#[builder(derive(Clone, Debug))]
pub struct HistogramConfig {
    /// Number of bins (default: 1500).
    #[builder(default = DEFAULT_BIN_COUNT)]
    pub bin_count: usize,

    /// Lower percentile level for range trimming (default: 0.01).
    #[builder(default = 0.01)]
    pub lower_percentile: f64,

    /// Upper percentile level for range trimming (default: 0.99).
    #[builder(default = 0.99)]
    pub upper_percentile: f64,

    /// Fraction of the trimmed range added symmetrically on both sides
    /// (default: 0.05). Keeps near-cutoff values inside the binned range
    /// instead of clipping them.
    #[builder(default = 0.05)]
    pub padding_fraction: f64,

    /// Apply Gaussian smoothing to the merged counts (default: false).
    ///
    /// Smoothing produces the rendering variant; exact counts are lost
    /// (see [`Histogram::smoothed`](super::Histogram::smoothed)).
    #[builder(default = false)]
    pub smoothing: bool,

    /// Gaussian kernel sigma for smoothing (default: 1.5).
    #[builder(default = 1.5)]
    pub smoothing_sigma: f64,

    /// Worker thread count: 0 = auto, 1 = sequential, n = exactly n
    /// (default: 0).
    #[builder(default = 0)]
    pub n_threads: usize,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
