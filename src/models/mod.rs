//! Data models module
//!
//! Contains per-iteration results and the collected result sequences.

pub mod result;

// Re-export commonly used types
pub use result::{BenchmarkResults, IterationResult};
