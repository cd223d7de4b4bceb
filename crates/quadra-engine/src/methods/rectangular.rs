//! Rectangular method with interior sampling.
//!
//! Samples are taken at x_i = start + i·dx for i = 1..n-1. Both boundary
//! points are excluded, which makes this neither a left nor a midpoint rule.
//! The range must stay exactly `1..n-1`: reference outputs depend on it.

use rayon::ThreadPool;

use crate::quadratic::Quadratic;
use crate::reduce::{interior_sum, ParallelConfig};

/// Approximates the integral as dx · Σ_{i=1}^{n-1} f(start + i·dx).
///
/// Raw samples are accumulated and multiplied by dx once at the end.
/// For `n <= 1` the sum is empty and the result is `0.0`.
#[must_use]
pub fn rectangular(
    pool: &ThreadPool,
    config: &ParallelConfig,
    quadratic: &Quadratic,
    n: u64,
    start: f64,
    dx: f64,
) -> f64 {
    interior_sum(pool, config, quadratic, start, dx, n) * dx
}
