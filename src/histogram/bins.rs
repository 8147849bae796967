//! Per-chunk binning and the final merge.
//!
//! Each worker re-uses its already-parsed sample sequence and accumulates
//! into a private bin-count array, so there is no cross-thread contention.
//! The merge is a plain index-wise sum after the binning join barrier.

/// Accumulate one chunk's samples into a local bin-count array.
///
/// `scale = bin_count / (max - min)` maps a value to its bin by linear
/// scaling. Values outside `[min, max]` are discarded; they contribute to
/// no bin, which is the only way the final counts can sum to less than the
/// parsed sample count. The clamp guards floating-point edge rounding at
/// `v == max`.
pub fn bin_chunk(samples: &[i64], min: i64, max: i64, bin_count: usize) -> Vec<i64> {
    debug_assert!(min < max);
    debug_assert!(bin_count > 0);

    // The padded range may span more than the i64 domain, so the width and
    // offsets are taken through i128 before converting to f64.
    let scale = bin_count as f64 / (max as i128 - min as i128) as f64;
    let mut bins = vec![0i64; bin_count];
    for &value in samples {
        if value < min || value > max {
            continue;
        }
        let offset = (value as i128 - min as i128) as f64;
        let bin = ((offset * scale) as usize).min(bin_count - 1);
        bins[bin] += 1;
    }
    bins
}

/// Sum the per-worker bin arrays into the final counts.
///
/// Pure reduction, single-threaded, run after all binning workers have
/// joined. Addition is commutative, so worker order cannot affect the
/// result.
pub fn merge_bins(locals: Vec<Vec<i64>>, bin_count: usize) -> Vec<i64> {
    let mut merged = vec![0i64; bin_count];
    for local in locals {
        debug_assert_eq!(local.len(), bin_count);
        for (total, count) in merged.iter_mut().zip(local) {
            *total += count;
        }
    }
    merged
}
