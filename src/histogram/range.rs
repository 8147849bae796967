//! Robust value-range estimation via percentile trim and padding.
//!
//! Using the 1st/99th percentile values instead of the true min/max keeps a
//! handful of pathological outliers from dominating the bin width. The
//! trimmed range is then expanded symmetrically by a fixed fraction so that
//! the bulk of near-cutoff values stays inside the binned range instead of
//! being clipped.

/// Estimate the padded `(min, max)` range of `samples`.
///
/// `lower` and `upper` are percentile levels in `[0, 1]`; `padding` is the
/// fraction of the trimmed range added on each side, rounded to the nearest
/// integer value unit.
///
/// The percentile values are found with partial selection
/// (`select_nth_unstable`, expected O(N)); `samples` is reordered in the
/// process, which is why the engine hands in a scratch copy. The result
/// depends only on the set of values, not their order.
///
/// Returns `None` when the range is degenerate: no samples, or the trimmed
/// bounds collapse (`min >= max`, e.g. fewer than 2 distinct values).
pub fn percentile_trimmed_range(
    samples: &mut [i64],
    lower: f64,
    upper: f64,
    padding: f64,
) -> Option<(i64, i64)> {
    let n = samples.len();
    if n == 0 {
        return None;
    }

    let lo_rank = (lower * (n - 1) as f64).floor() as usize;
    let hi_rank = (upper * (n - 1) as f64).floor() as usize;

    let (_, &mut min_val, above) = samples.select_nth_unstable(lo_rank);
    if hi_rank <= lo_rank {
        return None;
    }
    // Rank hi_rank of the full slice lives at hi_rank - lo_rank - 1 within
    // the partition above the lower percentile.
    let (_, &mut max_val, _) = above.select_nth_unstable(hi_rank - lo_rank - 1);

    if min_val >= max_val {
        return None;
    }

    // The trimmed bounds may sit at opposite ends of the i64 domain, so the
    // span and padding arithmetic run in i128; the padded bounds saturate
    // back into i64. Saturation preserves `lo < hi` because the unpadded
    // bounds are always covered.
    let range = max_val as i128 - min_val as i128;
    let pad = (range as f64 * padding).round() as i128;
    let lo = (min_val as i128 - pad).clamp(i64::MIN as i128, i64::MAX as i128) as i64;
    let hi = (max_val as i128 + pad).clamp(i64::MIN as i128, i64::MAX as i128) as i64;
    Some((lo, hi))
}
