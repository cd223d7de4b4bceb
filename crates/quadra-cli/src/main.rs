//! CLI entrypoint for quadra.

use std::process::ExitCode;

use anyhow::{Context, Result};
use quadra_cli::{args, logging, Args, CliError};
use quadra_engine::{ParallelConfig, QuadratureEngine};
use tracing::info;

fn run() -> Result<()> {
    let args = Args::parse_from_argv(std::env::args_os())?;
    let request = args.validate()?;

    logging::init(args.verbose);
    info!(
        n = request.n(),
        workers = request.worker_count(),
        method = %request.method(),
        "Starting quadra"
    );

    let engine = QuadratureEngine::new(request, ParallelConfig::default())
        .context("failed to start quadrature engine")?;

    engine.run_each(|result| println!("{result}"));

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<CliError>() {
            Some(CliError::Help(text)) => {
                print!("{text}");
                ExitCode::SUCCESS
            }
            Some(cli) => {
                println!("{cli}");
                if cli.shows_usage() {
                    print!("{}", args::usage());
                }
                ExitCode::from(cli.exit_code())
            }
            None => {
                eprintln!("error: {err:#}");
                ExitCode::from(4)
            }
        },
    }
}
