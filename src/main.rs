use std::process::ExitCode;

use clap::error::ErrorKind;
use ddbench::bench::{BenchmarkRunner, DdSummaryParser};
use ddbench::cli::{usage_error, Cli};
use ddbench::config::ToolConfig;
use ddbench::io::DdCommand;
use ddbench::models::BenchmarkResults;
use ddbench::{DdBenchError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only benchmark output
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = if verbose {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn progress_bar() -> ProgressBar {
    let style = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} iterations ({elapsed})")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    ProgressBar::new(0).with_style(style)
}

async fn run(cli: Cli) -> Result<BenchmarkResults> {
    // Validate before anything is spawned.
    let params = cli.into_parameters()?;
    let tool = ToolConfig::from_env();

    let runner = BenchmarkRunner::new(params, DdCommand::new(&tool), DdSummaryParser::new())
        .with_progress(progress_bar());
    runner.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            println!("{}", usage_error(&err));
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(results) => {
            println!("{}", results);
            ExitCode::SUCCESS
        }
        Err(err @ (DdBenchError::Usage(_)
        | DdBenchError::InvalidIterations(_)
        | DdBenchError::InvalidBlockSize(_)
        | DdBenchError::ToolFailed { .. })) => {
            println!("{}", err);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
