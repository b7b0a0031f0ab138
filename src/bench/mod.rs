//! Benchmark engine module
//!
//! Contains the iteration loop and the parsing of the block-copy tool's report.

pub mod parser;
pub mod runner;

// Re-export commonly used types
pub use parser::{DdSummaryParser, SummaryParser};
pub use runner::BenchmarkRunner;
