//! Method driver.
//!
//! A [`QuadratureEngine`] owns a rayon thread pool sized once from the
//! request's worker count. Each run gets a fresh timer; runs are executed
//! sequentially and share nothing but the read-only request.

use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::error::EngineError;
use crate::exact::exact_integral;
use crate::methods::{rectangular, trapezoidal};
use crate::reduce::ParallelConfig;
use crate::request::{IntegralResult, IntegrationRequest, Method};

/// Runs quadrature methods for a single request on a dedicated worker pool.
pub struct QuadratureEngine {
    request: IntegrationRequest,
    config: ParallelConfig,
    pool: ThreadPool,
}

impl QuadratureEngine {
    /// Creates an engine and spawns `request.worker_count()` worker threads.
    pub fn new(request: IntegrationRequest, config: ParallelConfig) -> Result<Self, EngineError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(request.worker_count())
            .thread_name(|i| format!("quadra-worker-{i}"))
            .build()?;

        debug!(
            workers = request.worker_count(),
            n = request.n(),
            threshold = config.parallel_threshold,
            chunks_per_worker = config.chunks_per_worker,
            "quadrature engine ready"
        );

        Ok(Self {
            request,
            config,
            pool,
        })
    }

    /// The request this engine was built for.
    #[must_use]
    pub fn request(&self) -> &IntegrationRequest {
        &self.request
    }

    /// Number of threads in the worker pool.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs every method selected by the request, rectangular first.
    #[must_use]
    pub fn run(&self) -> Vec<IntegralResult> {
        let mut results = Vec::with_capacity(2);
        self.run_each(|result| results.push(result));
        results
    }

    /// Like [`run`](Self::run), handing each result to `on_result` as soon
    /// as its method finishes.
    pub fn run_each(&self, mut on_result: impl FnMut(IntegralResult)) {
        let method = self.request.method();
        if method.includes_rectangular() {
            on_result(self.run_rectangular());
        }
        if method.includes_trapezoidal() {
            on_result(self.run_trapezoidal());
        }
    }

    /// Runs the rectangular method.
    #[must_use]
    pub fn run_rectangular(&self) -> IntegralResult {
        let req = &self.request;
        self.timed(Method::Rectangular, || {
            rectangular(
                &self.pool,
                &self.config,
                &req.quadratic(),
                req.n(),
                req.start(),
                req.step().get(),
            )
        })
    }

    /// Runs the trapezoidal rule.
    #[must_use]
    pub fn run_trapezoidal(&self) -> IntegralResult {
        let req = &self.request;
        self.timed(Method::Trapezoidal, || {
            trapezoidal(
                &self.pool,
                &self.config,
                &req.quadratic(),
                req.n(),
                req.start(),
                req.end(),
                req.step().get(),
            )
        })
    }

    fn timed(&self, method: Method, compute: impl FnOnce() -> f64) -> IntegralResult {
        info!("Calculating using {}", method.name());

        let started = Instant::now();
        let value = compute();
        let elapsed = started.elapsed();

        let req = &self.request;
        debug!(
            method = %method,
            value,
            elapsed_secs = elapsed.as_secs_f64(),
            deviation = (value - exact_integral(&req.quadratic(), req.start(), req.end())).abs(),
            "method finished"
        );

        IntegralResult {
            method,
            value,
            elapsed,
            start: req.start(),
            end: req.end(),
        }
    }
}
