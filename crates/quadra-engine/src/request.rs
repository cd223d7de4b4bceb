//! Integration requests and their results.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::RequestError;
use crate::quadratic::Quadratic;

/// Which quadrature method(s) to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Interior-sampling rectangular method only.
    Rectangular,
    /// Composite trapezoidal rule only.
    Trapezoidal,
    /// Rectangular followed by trapezoidal.
    #[default]
    Both,
}

impl Method {
    /// Returns true if the rectangular method should run.
    #[must_use]
    pub fn includes_rectangular(self) -> bool {
        matches!(self, Method::Rectangular | Method::Both)
    }

    /// Returns true if the trapezoidal rule should run.
    #[must_use]
    pub fn includes_trapezoidal(self) -> bool {
        matches!(self, Method::Trapezoidal | Method::Both)
    }

    /// Human-readable name used in log output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Rectangular => "rectangular method",
            Method::Trapezoidal => "trapezoidal rule",
            Method::Both => "rectangular method and trapezoidal rule",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Rectangular => "rec",
            Method::Trapezoidal => "trap",
            Method::Both => "both",
        };
        f.write_str(s)
    }
}

/// Error returned when a method selector string is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown method '{0}', expected one of: rec, trap, both")]
pub struct ParseMethodError(pub String);

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rec" | "rectangular" => Ok(Method::Rectangular),
            "trap" | "trapezoidal" => Ok(Method::Trapezoidal),
            "both" => Ok(Method::Both),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// Width of one subdivision, dx = (end - start) / n.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct StepSize(f64);

impl StepSize {
    /// Returns dx as a float.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// A validated, read-only description of one integration job.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegrationRequest {
    quadratic: Quadratic,
    start: f64,
    end: f64,
    n: u64,
    worker_count: usize,
    method: Method,
}

impl IntegrationRequest {
    /// Builds a request, rejecting non-finite input, empty intervals and
    /// zero counts.
    ///
    /// Checks run in that order, so a NaN bound reports
    /// [`RequestError::NonFiniteBound`] rather than an empty interval.
    pub fn new(
        quadratic: Quadratic,
        start: f64,
        end: f64,
        n: u64,
        worker_count: usize,
        method: Method,
    ) -> Result<Self, RequestError> {
        for (name, value) in [("a", quadratic.a), ("b", quadratic.b), ("c", quadratic.c)] {
            if !value.is_finite() {
                return Err(RequestError::NonFiniteCoefficient { name, value });
            }
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(RequestError::NonFiniteBound { start, end });
        }
        if start >= end {
            return Err(RequestError::EmptyInterval { start, end });
        }
        if !(end - start).is_finite() {
            return Err(RequestError::SpanOverflow { start, end });
        }
        if n == 0 {
            return Err(RequestError::ZeroSubdivisions);
        }
        if worker_count == 0 {
            return Err(RequestError::ZeroWorkers);
        }

        Ok(Self {
            quadratic,
            start,
            end,
            n,
            worker_count,
            method,
        })
    }

    /// The integrand.
    #[must_use]
    pub fn quadratic(&self) -> Quadratic {
        self.quadratic
    }

    /// Lower bound.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Number of subdivisions.
    #[must_use]
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Number of worker threads.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Requested method selector.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Subdivision width derived from the bounds and `n`.
    #[must_use]
    pub fn step(&self) -> StepSize {
        StepSize((self.end - self.start) / self.n as f64)
    }
}

/// Outcome of a single method run.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegralResult {
    /// Method that produced the value (never [`Method::Both`])
    pub method: Method,
    /// Computed integral estimate
    pub value: f64,
    /// Wall-clock time spent in the method
    pub elapsed: Duration,
    /// Lower bound of the integration
    pub start: f64,
    /// Upper bound of the integration
    pub end: f64,
}

impl fmt::Display for IntegralResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Calculation took {:.6} seconds", self.elapsed.as_secs_f64())?;
        write!(
            f,
            "Calculated integral for limits from {:.6} to {:.6} is: {:.6}",
            self.start, self.end, self.value
        )
    }
}
