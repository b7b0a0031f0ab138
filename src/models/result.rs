//! Benchmark result data models
//!
//! Per-iteration values are kept as the exact text tokens the tool printed.

use std::fmt;

/// Values extracted from one block-copy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationResult {
    /// Summary line the values were taken from
    pub summary: String,
    /// Elapsed time token, e.g. `0.002`
    pub elapsed_time: String,
    /// Rate and unit joined without a separator, e.g. `500kB/s`
    pub bandwidth: String,
}

/// The two parallel result sequences, one entry per successful iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkResults {
    pub times: Vec<String>,
    pub bandwidths: Vec<String>,
}

impl BenchmarkResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(iterations: usize) -> Self {
        Self {
            times: Vec::with_capacity(iterations),
            bandwidths: Vec::with_capacity(iterations),
        }
    }

    /// Append one iteration's values
    pub fn push(&mut self, result: IterationResult) {
        self.times.push(result.elapsed_time);
        self.bandwidths.push(result.bandwidth);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Prints `times` then `bandwidths`, one list per line, e.g. `['0.002', '0.003']`
impl fmt::Display for BenchmarkResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.times)?;
        writeln!(f)?;
        write_list(f, &self.bandwidths)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write_quoted(f, item)?;
    }
    write!(f, "]")
}

/// Single quotes, switching to double quotes when the text holds only a single quote
fn write_quoted(f: &mut fmt::Formatter<'_>, item: &str) -> fmt::Result {
    if item.contains('\'') && !item.contains('"') {
        return write!(f, "\"{}\"", item.replace('\\', "\\\\"));
    }
    let escaped = item.replace('\\', "\\\\").replace('\'', "\\'");
    write!(f, "'{}'", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iteration(time: &str, bw: &str) -> IterationResult {
        IterationResult {
            summary: String::new(),
            elapsed_time: time.to_string(),
            bandwidth: bw.to_string(),
        }
    }

    #[test]
    fn test_push_keeps_order() {
        let mut results = BenchmarkResults::new();
        assert!(results.is_empty());
        results.push(iteration("0.002", "500kB/s"));
        results.push(iteration("0.003", "333kB/s"));

        assert_eq!(results.len(), 2);
        assert_eq!(results.times, vec!["0.002", "0.003"]);
        assert_eq!(results.bandwidths, vec!["500kB/s", "333kB/s"]);
    }

    #[test]
    fn test_display() {
        let mut results = BenchmarkResults::with_capacity(1);
        results.push(iteration("0.002", "500kB/s"));
        results.push(iteration("0.004", "250kB/s"));
        assert_eq!(
            results.to_string(),
            "['0.002', '0.004']\n['500kB/s', '250kB/s']"
        );
        assert_eq!(BenchmarkResults::new().to_string(), "[]\n[]");
    }

    #[test]
    fn test_display_quoting() {
        let mut results = BenchmarkResults::new();
        results.push(iteration("it's", "a\\b"));
        assert_eq!(results.to_string(), "[\"it's\"]\n['a\\\\b']");
    }
}
