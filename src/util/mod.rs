//! Utility functions module
//!
//! Contains helpers for human-readable sizes and durations.

pub mod units;

// Re-export commonly used functions
pub use units::{format_block_size, format_elapsed};
