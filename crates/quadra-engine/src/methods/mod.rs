//! Quadrature methods.
//!
//! Both methods share the interior reduction in [`crate::reduce`]; they
//! differ only in how the boundary samples are treated.
//!
//! # Available Methods
//!
//! - **Rectangular**: sum of interior samples `i = 1..n-1` times dx
//! - **Trapezoidal**: interior sum plus the mean of the endpoints, times dx

pub mod rectangular;
pub mod trapezoidal;

pub use rectangular::rectangular;
pub use trapezoidal::trapezoidal;
