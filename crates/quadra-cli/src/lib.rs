//! Command-line front end for `quadra-engine`.
//!
//! Parses and validates the integration parameters, maps misuse onto
//! distinct exit codes and sets up logging. The numerical work lives
//! entirely in the engine crate.

pub mod args;
pub mod error;
pub mod logging;

pub use args::Args;
pub use error::CliError;
