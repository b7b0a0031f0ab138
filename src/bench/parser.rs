//! Extraction of timing values from the block-copy tool's stderr
//!
//! dd prints a three-line report:
//!
//! ```text
//! 1+0 records in
//! 1+0 records out
//! 1024 bytes (1.0 kB) copied, 0.002 s, 500 kB/s
//! ```
//!
//! Only the third line carries the values. It is split on single spaces and
//! read by position.

use tracing::debug;

use crate::models::IterationResult;
use crate::{DdBenchError, Result};

const SUMMARY_LINE: usize = 2;
const ELAPSED_TOKEN: usize = 5;
const RATE_TOKEN: usize = 7;
const UNIT_TOKEN: usize = 8;

/// Turns one run's stderr into an iteration result
pub trait SummaryParser {
    fn parse(&self, stderr: &str) -> Result<IterationResult>;
}

/// Positional parser for dd's human-readable summary
#[derive(Debug, Clone, Copy, Default)]
pub struct DdSummaryParser;

impl DdSummaryParser {
    pub fn new() -> Self {
        Self
    }
}

impl SummaryParser for DdSummaryParser {
    fn parse(&self, stderr: &str) -> Result<IterationResult> {
        let line = stderr.lines().nth(SUMMARY_LINE).ok_or_else(|| {
            DdBenchError::MalformedOutput(format!(
                "expected at least {} lines on stderr, got {}",
                SUMMARY_LINE + 1,
                stderr.lines().count()
            ))
        })?;

        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.len() <= UNIT_TOKEN {
            return Err(DdBenchError::MalformedOutput(format!(
                "expected at least {} tokens in summary line {:?}",
                UNIT_TOKEN + 1,
                line
            )));
        }

        let result = IterationResult {
            summary: line.to_string(),
            elapsed_time: tokens[ELAPSED_TOKEN].to_string(),
            bandwidth: format!("{}{}", tokens[RATE_TOKEN], tokens[UNIT_TOKEN]),
        };
        debug!(time = %result.elapsed_time, bandwidth = %result.bandwidth, "parsed summary");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str =
        "1+0 records in\n1+0 records out\n1024 bytes (1.0 kB) copied, 0.002 s, 500 kB/s";

    #[test]
    fn test_parse_fixture() {
        let result = DdSummaryParser::new().parse(FIXTURE).unwrap();
        assert_eq!(result.elapsed_time, "0.002");
        assert_eq!(result.bandwidth, "500kB/s");
        assert_eq!(result.summary, "1024 bytes (1.0 kB) copied, 0.002 s, 500 kB/s");
    }

    #[test]
    fn test_parse_with_trailing_newline() {
        let stderr = "1+0 records in\n1+0 records out\n\
                      65536 bytes (66 kB) copied, 0.0153 s, 4.3 MB/s\n";
        let result = DdSummaryParser.parse(stderr).unwrap();
        assert_eq!(result.elapsed_time, "0.0153");
        assert_eq!(result.bandwidth, "4.3MB/s");
    }

    #[test]
    fn test_too_few_lines() {
        let err = DdSummaryParser.parse("1+0 records in\n1+0 records out\n").unwrap_err();
        match err {
            DdBenchError::MalformedOutput(msg) => assert!(msg.contains("got 2")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_too_few_tokens() {
        let err = DdSummaryParser
            .parse("1+0 records in\n1+0 records out\n1024 bytes copied\n")
            .unwrap_err();
        assert!(matches!(err, DdBenchError::MalformedOutput(_)));
    }

    #[test]
    fn test_empty_stderr() {
        assert!(matches!(
            DdSummaryParser.parse(""),
            Err(DdBenchError::MalformedOutput(_))
        ));
    }
}
