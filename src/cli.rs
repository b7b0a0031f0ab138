//! Command-line interface definition

use std::path::PathBuf;

use clap::Parser;

use crate::config::InvocationParameters;
use crate::{DdBenchError, Result, USAGE};

/// Write one synchronous block with dd, N times, and report time and bandwidth
#[derive(Parser, Debug)]
#[command(name = "ddbench", version, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// File to overwrite on every iteration
    #[arg(allow_hyphen_values = true)]
    pub output_file: PathBuf,

    /// Number of iterations
    #[arg(allow_negative_numbers = true)]
    pub iterations: i64,

    /// Block size in kilobytes
    #[arg(allow_negative_numbers = true)]
    pub block_size_kb: i64,
}

impl Cli {
    /// Parse from the given argument list. Help and version requests come back
    /// as clap errors so the caller can print them and exit cleanly.
    pub fn parse_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Validate into benchmark parameters
    pub fn into_parameters(self) -> Result<InvocationParameters> {
        InvocationParameters::new(self.output_file, self.iterations, self.block_size_kb)
    }
}

/// Translate a clap parse failure into the crate error. Missing or surplus
/// positionals produce the fixed usage line, anything else keeps clap's text.
pub fn usage_error(err: &clap::Error) -> DdBenchError {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::MissingRequiredArgument
        | ErrorKind::UnknownArgument
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => DdBenchError::Usage(USAGE.to_string()),
        _ => DdBenchError::Usage(err.to_string().trim_end().to_string()),
    }
}
