//! Composite trapezoidal rule.
//!
//! ∫ ≈ dx · [ (f(x_0) + f(x_n)) / 2 + Σ_{i=1}^{n-1} f(x_i) ]

use rayon::ThreadPool;

use crate::quadratic::Quadratic;
use crate::reduce::{interior_sum, ParallelConfig};

/// Approximates the integral with the composite trapezoidal rule.
///
/// The two endpoint samples are evaluated on the calling thread before the
/// parallel region; only the interior sum runs on the pool. With `n <= 1`
/// the result is exactly `(f(start) + f(end)) / 2 · dx`.
#[must_use]
pub fn trapezoidal(
    pool: &ThreadPool,
    config: &ParallelConfig,
    quadratic: &Quadratic,
    n: u64,
    start: f64,
    end: f64,
    dx: f64,
) -> f64 {
    let average = (quadratic.eval(start) + quadratic.eval(end)) / 2.0;
    let interior = interior_sum(pool, config, quadratic, start, dx, n);
    (interior + average) * dx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::exact_integral;
    use rayon::ThreadPoolBuilder;

    fn pool(threads: usize) -> ThreadPool {
        ThreadPoolBuilder::new().num_threads(threads).build().unwrap()
    }

    fn run(q: Quadratic, start: f64, end: f64, n: u64, threads: usize) -> f64 {
        let dx = (end - start) / n as f64;
        trapezoidal(&pool(threads), &ParallelConfig::default(), &q, n, start, end, dx)
    }

    #[test]
    fn test_x_squared_unit_interval() {
        let value = run(Quadratic::new(1.0, 0.0, 0.0), 0.0, 1.0, 1_000_000, 4);
        assert!((value - 1.0 / 3.0).abs() < 1e-4, "got {value}");
    }

    #[test]
    fn test_exact_for_linear() {
        let q = Quadratic::new(0.0, 3.0, -2.0);
        let value = run(q, -1.0, 5.0, 6, 2);
        assert!((value - exact_integral(&q, -1.0, 5.0)).abs() < 1e-12);
    }

    #[test]
    fn test_single_subdivision_is_average_times_dx() {
        let q = Quadratic::new(3.0, 2.0, 1.0);
        let value = run(q, -1.0, 1.0, 1, 4);
        let average = (q.eval(-1.0) + q.eval(1.0)) / 2.0;
        assert_eq!(value, average * 2.0);
    }

    #[test]
    fn test_known_error_for_x_squared() {
        // Trapezoidal error for x^2 on [0, 1] is exactly dx^2 / 6
        let q = Quadratic::new(1.0, 0.0, 0.0);
        let n = 100;
        let dx = 1.0 / n as f64;
        let value = run(q, 0.0, 1.0, n, 3);
        assert!((value - (1.0 / 3.0 + dx * dx / 6.0)).abs() < 1e-12);
    }

    #[test]
    fn test_second_order_convergence() {
        let q = Quadratic::new(2.0, -1.0, 0.0);
        let exact = exact_integral(&q, -1.0, 2.0);
        let coarse = (run(q, -1.0, 2.0, 100, 2) - exact).abs();
        let fine = (run(q, -1.0, 2.0, 1_000, 2) - exact).abs();
        let ratio = coarse / fine;
        assert!(ratio > 90.0 && ratio < 110.0, "ratio {ratio}");
    }

    #[test]
    fn test_converges_faster_than_rectangular() {
        use crate::methods::rectangular;

        let q = Quadratic::new(1.0, 1.0, 1.0);
        let n = 10_000;
        let dx = 2.0 / n as f64;
        let p = pool(2);
        let config = ParallelConfig::default();
        let exact = exact_integral(&q, 0.0, 2.0);

        let trap_err = (trapezoidal(&p, &config, &q, n, 0.0, 2.0, dx) - exact).abs();
        let rect_err = (rectangular(&p, &config, &q, n, 0.0, dx) - exact).abs();
        assert!(trap_err < rect_err);
    }
}
