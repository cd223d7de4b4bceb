//! # quadra-engine
//!
//! Parallel numerical quadrature of quadratic functions.
//!
//! This crate provides:
//! - A pure evaluator for f(x) = a·x² + b·x + c
//! - The interior-sampling rectangular method
//! - The composite trapezoidal rule
//! - A fork-join reduction over a fixed-size rayon thread pool
//!
//! ## Reduction Model
//!
//! The interior index range `[1, n-1]` is split into contiguous chunks. Each
//! worker sums its chunk into a local accumulator and the partial sums are
//! folded in chunk order once the join completes, so a fixed worker count
//! always reproduces the same bits.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quadra_engine::{IntegrationRequest, Method, ParallelConfig, QuadratureEngine, Quadratic};
//!
//! let request = IntegrationRequest::new(Quadratic::new(1.0, 0.0, 0.0), 0.0, 1.0, 1_000_000, 4, Method::Both)?;
//! let engine = QuadratureEngine::new(request, ParallelConfig::default())?;
//! for result in engine.run() {
//!     println!("{result}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod engine;
pub mod error;
pub mod exact;
pub mod methods;
pub mod quadratic;
pub mod reduce;
pub mod request;

#[cfg(test)]
mod proptests;

pub use engine::QuadratureEngine;
pub use error::{EngineError, RequestError};
pub use exact::exact_integral;
pub use methods::{rectangular, trapezoidal};
pub use quadratic::{evaluate, Quadratic};
pub use reduce::ParallelConfig;
pub use request::{IntegralResult, IntegrationRequest, Method, ParseMethodError, StepSize};
