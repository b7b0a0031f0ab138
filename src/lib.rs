//! ddbench - repeated dd write benchmark
//!
//! Runs the external `dd` utility a fixed number of times, writing one
//! synchronous block per run, and collects the elapsed time and bandwidth
//! reported on its stderr.

use std::fmt;

pub mod bench;
pub mod cli;
pub mod config;
pub mod io;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum DdBenchError {
    /// Wrong argument count or unparsable argument
    Usage(String),
    /// Iteration count below one
    InvalidIterations(i64),
    /// Block size below one kilobyte
    InvalidBlockSize(i64),
    /// The block-copy tool reported a failure on stderr
    ToolFailed {
        /// Raw stderr of the failing run
        stderr: String,
    },
    /// The block-copy tool could not be spawned or waited on
    IoError(std::io::Error),
    /// The tool's stderr did not carry the expected summary line
    MalformedOutput(String),
}

impl fmt::Display for DdBenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DdBenchError::Usage(msg) => write!(f, "{}", msg),
            DdBenchError::InvalidIterations(_) => {
                write!(f, "Error, expecting the number of iterations to be non-zero")
            }
            DdBenchError::InvalidBlockSize(_) => {
                write!(f, "Error, expecting the file size to be non-zero")
            }
            DdBenchError::ToolFailed { stderr } => write!(f, "{}", stderr),
            DdBenchError::IoError(err) => write!(f, "I/O error: {}", err),
            DdBenchError::MalformedOutput(msg) => write!(f, "Malformed tool output: {}", msg),
        }
    }
}

impl std::error::Error for DdBenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DdBenchError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DdBenchError {
    fn from(err: std::io::Error) -> Self {
        DdBenchError::IoError(err)
    }
}

/// Result type alias for ddbench operations
pub type Result<T> = std::result::Result<T, DdBenchError>;

/// Environment variable overriding the block-copy executable
pub const DD_PROGRAM_ENV: &str = "DDBENCH_DD";
pub const DEFAULT_DD_PROGRAM: &str = "dd";
pub const USAGE: &str =
    "Expecting the following arguments: output_file local, number of iterations, size of the file";
/// Marker whose presence in the tool's stderr aborts the run
pub const FAILURE_MARKER: &str = "failed";
