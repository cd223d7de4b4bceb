//! Errors raised while building a request or an engine.

use thiserror::Error;

/// Errors that can occur while constructing an [`IntegrationRequest`](crate::IntegrationRequest).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RequestError {
    /// The interval is empty or reversed.
    #[error("start ({start}) must be less than end ({end})")]
    EmptyInterval {
        /// Lower bound as given
        start: f64,
        /// Upper bound as given
        end: f64,
    },

    /// A coefficient is NaN or infinite.
    #[error("coefficient '{name}' must be finite, got {value}")]
    NonFiniteCoefficient {
        /// Coefficient name (`a`, `b` or `c`)
        name: &'static str,
        /// Value as given
        value: f64,
    },

    /// A bound is NaN or infinite.
    #[error("bounds must be finite, got start = {start}, end = {end}")]
    NonFiniteBound {
        /// Lower bound as given
        start: f64,
        /// Upper bound as given
        end: f64,
    },

    /// end - start overflows to infinity.
    #[error("interval from {start} to {end} is too wide to subdivide")]
    SpanOverflow {
        /// Lower bound as given
        start: f64,
        /// Upper bound as given
        end: f64,
    },

    /// `n` was zero.
    #[error("number of subdivisions must be at least 1")]
    ZeroSubdivisions,

    /// The worker count was zero.
    #[error("number of workers must be at least 1")]
    ZeroWorkers,
}

/// Errors that can occur while constructing a [`QuadratureEngine`](crate::QuadratureEngine).
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request failed validation.
    #[error("invalid request: {0}")]
    Request(#[from] RequestError),

    /// rayon could not spawn the worker threads.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
