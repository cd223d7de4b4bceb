//! The quadratic integrand f(x) = a·x² + b·x + c.

/// Evaluates a·x² + b·x + c.
///
/// The square is an explicit multiplication rather than `powi`/`powf`.
#[inline]
#[must_use]
pub fn evaluate(a: f64, b: f64, c: f64, x: f64) -> f64 {
    a * (x * x) + b * x + c
}

/// Coefficients of a quadratic polynomial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quadratic {
    /// Coefficient of x²
    pub a: f64,
    /// Coefficient of x
    pub b: f64,
    /// Constant term
    pub c: f64,
}

impl Quadratic {
    /// Creates a quadratic from its coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates the polynomial at `x`.
    #[inline]
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        evaluate(self.a, self.b, self.c, x)
    }

    /// Evaluates the antiderivative a·x³/3 + b·x²/2 + c·x at `x`.
    #[must_use]
    pub fn antiderivative(&self, x: f64) -> f64 {
        let x2 = x * x;
        self.a * x2 * x / 3.0 + self.b * x2 / 2.0 + self.c * x
    }
}

impl std::fmt::Display for Quadratic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x^2 + {}x + {}", self.a, self.b, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate(1.0, 0.0, 0.0, 3.0), 9.0);
        assert_eq!(evaluate(12.0, 10.0, 0.0, -2.0), 28.0);
        assert_eq!(evaluate(0.0, 0.0, 5.0, 1e9), 5.0);
        assert_eq!(evaluate(2.0, -3.0, 1.0, 0.5), 0.0);
    }

    #[test]
    fn test_eval_matches_free_function() {
        let q = Quadratic::new(1.5, -2.0, 0.25);
        for &x in &[-10.0, -1.0, 0.0, 0.3, 7.0] {
            assert_eq!(q.eval(x), evaluate(1.5, -2.0, 0.25, x));
        }
    }

    #[test]
    fn test_antiderivative() {
        // F(x) = x^3 for 3x^2
        let q = Quadratic::new(3.0, 0.0, 0.0);
        assert!((q.antiderivative(2.0) - 8.0).abs() < 1e-12);

        // F(x) = x^2 + 4x for 2x + 4
        let q = Quadratic::new(0.0, 2.0, 4.0);
        assert!((q.antiderivative(3.0) - 21.0).abs() < 1e-12);
        assert_eq!(q.antiderivative(0.0), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Quadratic::new(1.0, 2.0, 3.0).to_string(), "1x^2 + 2x + 3");
    }
}
