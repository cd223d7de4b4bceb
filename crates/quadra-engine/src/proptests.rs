//! Property-based tests for the quadrature methods.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rayon::{ThreadPool, ThreadPoolBuilder};

    use crate::exact::exact_integral;
    use crate::methods::{rectangular, trapezoidal};
    use crate::quadratic::Quadratic;
    use crate::reduce::ParallelConfig;

    fn pool(threads: usize) -> ThreadPool {
        ThreadPoolBuilder::new().num_threads(threads).build().unwrap()
    }

    // Strategy for generating small coefficients
    fn coeff() -> impl Strategy<Value = f64> {
        -50.0f64..50.0f64
    }

    // Strategy for generating an interval with start < end
    fn interval() -> impl Strategy<Value = (f64, f64)> {
        (-100.0f64..100.0f64, 0.5f64..100.0f64).prop_map(|(s, w)| (s, s + w))
    }

    fn close(a: f64, b: f64, rel: f64, abs: f64) -> bool {
        (a - b).abs() <= abs.max(rel * a.abs().max(b.abs()))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn worker_count_invariance(
            a in coeff(), b in coeff(), c in coeff(),
            (start, end) in interval(),
            n in 2u64..50_000,
            workers in 2usize..9,
        ) {
            let q = Quadratic::new(a, b, c);
            let dx = (end - start) / n as f64;
            let config = ParallelConfig::always_parallel();
            let single = pool(1);
            let many = pool(workers);

            // Bound on the summed magnitudes; the signed total can cancel to zero
            let scale = (end - start) * (a.abs() * 4e4 + b.abs() * 2e2 + c.abs());

            let r1 = rectangular(&single, &config, &q, n, start, dx);
            let rn = rectangular(&many, &config, &q, n, start, dx);
            prop_assert!(close(r1, rn, 1e-9, 1e-10 * scale), "{} vs {}", r1, rn);

            let t1 = trapezoidal(&single, &config, &q, n, start, end, dx);
            let tn = trapezoidal(&many, &config, &q, n, start, end, dx);
            prop_assert!(close(t1, tn, 1e-9, 1e-10 * scale), "{} vs {}", t1, tn);
        }

        #[test]
        fn trapezoidal_error_matches_theory(
            a in coeff(), b in coeff(), c in coeff(),
            (start, end) in interval(),
            n in 10u64..2_000,
        ) {
            // For a quadratic the composite rule errs by exactly a·(end-start)·dx²/6
            let q = Quadratic::new(a, b, c);
            let dx = (end - start) / n as f64;
            let value = trapezoidal(&pool(2), &ParallelConfig::default(), &q, n, start, end, dx);
            let predicted = exact_integral(&q, start, end) + a * (end - start) * dx * dx / 6.0;

            let scale = (end - start) * (a.abs() * 4e4 + b.abs() * 2e2 + c.abs());
            prop_assert!(close(value, predicted, 1e-9, 1e-10 * scale), "{} vs {}", value, predicted);
        }

        #[test]
        fn rectangular_is_trapezoidal_minus_boundary(
            a in coeff(), b in coeff(), c in coeff(),
            (start, end) in interval(),
            n in 1u64..5_000,
        ) {
            let q = Quadratic::new(a, b, c);
            let dx = (end - start) / n as f64;
            let p = pool(3);
            let config = ParallelConfig::always_parallel();

            let rect = rectangular(&p, &config, &q, n, start, dx);
            let trap = trapezoidal(&p, &config, &q, n, start, end, dx);
            let boundary = (q.eval(start) + q.eval(end)) / 2.0 * dx;

            let scale = (end - start) * (a.abs() * 4e4 + b.abs() * 2e2 + c.abs());
            prop_assert!(close(trap - boundary, rect, 1e-9, 1e-10 * scale));
        }
    }
}
