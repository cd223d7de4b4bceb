//! CLI errors and their exit codes.

use thiserror::Error;

/// Fatal argument errors. Each maps to a distinct process exit code.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CliError {
    /// `--help`, `--version` or no arguments at all; carries the rendered text.
    #[error("{0}")]
    Help(String),

    /// A value could not be parsed or an unknown option was given.
    #[error("error parsing options: {0}")]
    Parse(String),

    /// A required parameter was absent.
    #[error("Parameter '{0}' wasn't provided")]
    Missing(&'static str),

    /// A required parameter was given more than once.
    #[error("Parameter '{0}' was provided more than once")]
    Duplicate(&'static str),

    /// start >= end.
    #[error("'s' ('start' = {start}) must be less than 'e' ('end' = {end})")]
    InvalidRange { start: f64, end: f64 },

    /// end - start does not fit in a finite float.
    #[error("'s' ('start' = {start}) and 'e' ('end' = {end}) span too wide an interval")]
    RangeTooWide { start: f64, end: f64 },
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Help(_) => 0,
            CliError::Parse(_) | CliError::Missing(_) => 1,
            CliError::Duplicate(_) => 2,
            CliError::InvalidRange { .. } | CliError::RangeTooWide { .. } => 3,
        }
    }

    /// Whether the usage text should follow the diagnostic.
    #[must_use]
    pub fn shows_usage(&self) -> bool {
        matches!(self, CliError::Missing(_) | CliError::Duplicate(_))
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        use clap::error::ErrorKind;

        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                CliError::Help(err.render().to_string())
            }
            _ => {
                let rendered = err.render().to_string();
                let first = rendered.lines().next().unwrap_or_default();
                CliError::Parse(first.trim_start_matches("error: ").to_string())
            }
        }
    }
}
