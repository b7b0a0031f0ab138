//! Configuration module
//!
//! Holds the validated invocation parameters and the environment-driven
//! settings for the external block-copy tool.

use std::path::PathBuf;

use crate::{DdBenchError, Result, DD_PROGRAM_ENV, DEFAULT_DD_PROGRAM};

/// Validated benchmark inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationParameters {
    /// Target file, overwritten on every iteration
    pub file_path: PathBuf,
    /// Number of block-copy runs
    pub iteration_count: u64,
    /// Size of the single block written per run, in kilobytes
    pub block_size_kb: u64,
}

impl InvocationParameters {
    /// Validate raw signed inputs. The iteration count is checked first.
    pub fn new(file_path: PathBuf, iteration_count: i64, block_size_kb: i64) -> Result<Self> {
        if iteration_count < 1 {
            return Err(DdBenchError::InvalidIterations(iteration_count));
        }
        if block_size_kb < 1 {
            return Err(DdBenchError::InvalidBlockSize(block_size_kb));
        }

        Ok(Self {
            file_path,
            iteration_count: iteration_count as u64,
            block_size_kb: block_size_kb as u64,
        })
    }

    /// Block size in bytes, using dd's decimal `KB` multiplier
    pub fn block_size_bytes(&self) -> u64 {
        self.block_size_kb.saturating_mul(1000)
    }
}

/// Settings for the external block-copy tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Executable invoked for each iteration
    pub dd_program: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            dd_program: PathBuf::from(DEFAULT_DD_PROGRAM),
        }
    }
}

impl ToolConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var_os(DD_PROGRAM_ENV) {
            Some(program) if !program.is_empty() => config.with_dd_program(PathBuf::from(program)),
            _ => config,
        }
    }

    /// Set the block-copy executable
    pub fn with_dd_program(mut self, program: PathBuf) -> Self {
        self.dd_program = program;
        self
    }
}
