//! CLI argument definitions and validation.

use std::ffi::OsString;
use std::num::{NonZeroU64, NonZeroUsize};

use clap::{CommandFactory, Parser};
use quadra_engine::{IntegrationRequest, Method, Quadratic, RequestError};

use crate::error::CliError;

/// CLI arguments for quadra.
///
/// Required parameters are collected as lists so that a missing or repeated
/// value can be reported by name with its own exit code.
#[derive(Parser, Debug)]
#[command(name = "quadra")]
#[command(version, about = "Parallel numerical integration of a*x^2 + b*x + c")]
#[command(long_about = r#"
Integrates f(x) = a*x^2 + b*x + c over [start, end] with the rectangular
method, the trapezoidal rule, or both, summing the samples on a pool of
worker threads.

Exit codes:
  0  success, or help requested
  1  a required parameter is missing or a value is malformed
  2  a required parameter was given more than once
  3  start is not less than end

Example:
  quadra --n 1000000 --a 1 --b 0 --c 0 -s 0 -e 1
  quadra --n 100000000 --a 12 --b 10 --c 0 -s -2000 -e 2000 -p 8 -m trap
"#)]
pub struct Args {
    /// Number of divisions for specified calculus
    #[arg(short = 'n', long = "n", value_name = "INT")]
    pub n: Vec<NonZeroU64>,

    /// Coefficient for x^2
    #[arg(short = 'a', long = "a", value_name = "REAL", allow_negative_numbers = true)]
    pub a: Vec<f64>,

    /// Coefficient for x
    #[arg(short = 'b', long = "b", value_name = "REAL", allow_negative_numbers = true)]
    pub b: Vec<f64>,

    /// Y-intercept of the parabola
    #[arg(short = 'c', long = "c", value_name = "REAL", allow_negative_numbers = true)]
    pub c: Vec<f64>,

    /// Start of the calculation
    #[arg(short = 's', long = "start", value_name = "REAL", allow_negative_numbers = true)]
    pub start: Vec<f64>,

    /// End of the calculation
    #[arg(short = 'e', long = "end", value_name = "REAL", allow_negative_numbers = true)]
    pub end: Vec<f64>,

    /// Number of worker threads
    #[arg(short = 'p', long = "processes", value_name = "INT", default_value = "4")]
    pub processes: NonZeroUsize,

    /// Method to run: rec, trap or both
    #[arg(short = 'm', long = "method", value_name = "rec|trap|both", default_value = "both")]
    pub method: Method,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parses `argv` (including the program name).
    ///
    /// An empty argument list is treated like `--help`.
    pub fn parse_from_argv<I, T>(argv: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        if argv.len() <= 1 {
            return Err(CliError::Help(usage()));
        }
        Ok(Self::try_parse_from(argv)?)
    }

    /// Checks that every required parameter was given exactly once and that
    /// the interval is non-empty, then builds the engine request.
    pub fn validate(&self) -> Result<IntegrationRequest, CliError> {
        let n = single("n", &self.n)?;
        let a = single("a", &self.a)?;
        let b = single("b", &self.b)?;
        let c = single("c", &self.c)?;
        let start = single("start", &self.start)?;
        let end = single("end", &self.end)?;

        IntegrationRequest::new(
            Quadratic::new(a, b, c),
            start,
            end,
            n.get(),
            self.processes.get(),
            self.method,
        )
        .map_err(|err| match err {
            RequestError::EmptyInterval { start, end } => CliError::InvalidRange { start, end },
            RequestError::SpanOverflow { start, end } => CliError::RangeTooWide { start, end },
            other => CliError::Parse(other.to_string()),
        })
    }
}

/// Rendered help text.
#[must_use]
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

fn single<T: Copy>(name: &'static str, values: &[T]) -> Result<T, CliError> {
    match values {
        [] => Err(CliError::Missing(name)),
        [value] => Ok(*value),
        _ => Err(CliError::Duplicate(name)),
    }
}
