//! Parallel summation of interior samples.
//!
//! The index range `[1, n-1]` is partitioned into contiguous chunks which are
//! summed on the worker pool. Each chunk owns a local accumulator. Partial
//! sums are collected in chunk order and folded on the calling thread after
//! the join, so no accumulator is ever shared between workers.

use std::ops::Range;

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::quadratic::Quadratic;

/// Configuration for the parallel reduction.
#[derive(Clone, Debug)]
pub struct ParallelConfig {
    /// Minimum number of interior samples to enable parallelism.
    pub parallel_threshold: u64,
    /// Number of contiguous chunks handed to each worker.
    pub chunks_per_worker: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 4096,
            chunks_per_worker: 1,
        }
    }
}

impl ParallelConfig {
    /// Configuration that always takes the parallel path.
    #[must_use]
    pub fn always_parallel() -> Self {
        Self {
            parallel_threshold: 0,
            ..Self::default()
        }
    }
}

/// Indices of the interior sample points, `1..n`.
///
/// Empty when `n <= 1`.
#[must_use]
pub fn interior_range(n: u64) -> Range<u64> {
    1..n.max(1)
}

/// Splits `range` into at most `chunks` contiguous, non-empty pieces.
///
/// Leftover indices go to the leading chunks, so chunk lengths differ by at
/// most one.
#[must_use]
pub fn partition(range: Range<u64>, chunks: usize) -> Vec<Range<u64>> {
    let len = range.end.saturating_sub(range.start);
    if len == 0 {
        return Vec::new();
    }

    let chunks = (chunks.max(1) as u64).min(len);
    let base = len / chunks;
    let extra = len % chunks;

    let mut pieces = Vec::with_capacity(chunks as usize);
    let mut lo = range.start;
    for k in 0..chunks {
        let size = base + u64::from(k < extra);
        pieces.push(lo..lo + size);
        lo += size;
    }
    pieces
}

/// Sums f(start + i·dx) over `indices` on the calling thread.
#[must_use]
pub fn sequential_sum(quadratic: &Quadratic, start: f64, dx: f64, indices: Range<u64>) -> f64 {
    indices
        .map(|i| quadratic.eval(start + i as f64 * dx))
        .sum()
}

/// Sums f(start + i·dx) for i in `[1, n-1]` using `pool`.
///
/// The raw samples are summed; scaling by dx is left to the caller. Falls
/// back to [`sequential_sum`] for ranges below `config.parallel_threshold`.
#[must_use]
pub fn interior_sum(
    pool: &ThreadPool,
    config: &ParallelConfig,
    quadratic: &Quadratic,
    start: f64,
    dx: f64,
    n: u64,
) -> f64 {
    let range = interior_range(n);
    let samples = range.end - range.start;

    if samples < config.parallel_threshold {
        tracing::trace!(samples, "sequential interior sum");
        return sequential_sum(quadratic, start, dx, range);
    }

    let chunks = partition(range, pool.current_num_threads() * config.chunks_per_worker.max(1));
    tracing::trace!(samples, chunks = chunks.len(), "parallel interior sum");

    let partials: Vec<f64> = pool.install(|| {
        chunks
            .into_par_iter()
            .map(|chunk| sequential_sum(quadratic, start, dx, chunk))
            .collect()
    });

    // Fold in chunk order so the total depends only on the partitioning
    partials.into_iter().sum()
}
