//! Closed-form reference integral.

use crate::quadratic::Quadratic;

/// Returns (a/3)(e³−s³) + (b/2)(e²−s²) + c(e−s).
#[must_use]
pub fn exact_integral(quadratic: &Quadratic, start: f64, end: f64) -> f64 {
    quadratic.antiderivative(end) - quadratic.antiderivative(start)
}
