//! Sequential benchmark loop
//!
//! Runs the block-copy tool `iteration_count` times, one after another,
//! stopping at the first run whose stderr reports a failure.

use std::time::Instant;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::bench::parser::SummaryParser;
use crate::config::InvocationParameters;
use crate::io::{BlockCopy, CopyOutput};
use crate::models::{BenchmarkResults, IterationResult};
use crate::util::units::{format_block_size, format_elapsed};
use crate::{DdBenchError, Result, FAILURE_MARKER};

const MAX_PREALLOCATED: u64 = 1024;

/// Benchmark executor, generic over the tool invocation and the output parser
pub struct BenchmarkRunner<C, P> {
    params: InvocationParameters,
    copier: C,
    parser: P,
    progress: ProgressBar,
}

impl<C: BlockCopy, P: SummaryParser> BenchmarkRunner<C, P> {
    pub fn new(params: InvocationParameters, copier: C, parser: P) -> Self {
        Self {
            params,
            copier,
            parser,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report iteration progress on the given bar
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        progress.set_length(self.params.iteration_count);
        self.progress = progress;
        self
    }

    /// Execute every iteration and return the collected sequences. Each
    /// iteration's summary line is printed as soon as it is parsed.
    pub async fn run(&self) -> Result<BenchmarkResults> {
        let start = Instant::now();
        info!(
            target_file = %self.params.file_path.display(),
            iterations = self.params.iteration_count,
            block_size = %format_block_size(self.params.block_size_bytes()),
            "starting write benchmark"
        );

        let capacity = self.params.iteration_count.min(MAX_PREALLOCATED) as usize;
        let mut results = BenchmarkResults::with_capacity(capacity);
        for index in 0..self.params.iteration_count {
            let result = match self.run_iteration(index).await {
                Ok(result) => result,
                Err(err) => {
                    self.progress.abandon();
                    return Err(err);
                }
            };
            self.progress.suspend(|| println!("{}", result.summary));
            results.push(result);
            self.progress.inc(1);
        }

        self.progress.finish_and_clear();
        info!(
            iterations = results.len(),
            elapsed = %format_elapsed(start.elapsed()),
            "write benchmark completed"
        );
        Ok(results)
    }

    /// One tool invocation plus parsing of its report
    pub async fn run_iteration(&self, index: u64) -> Result<IterationResult> {
        debug!(iteration = index + 1, "running block copy");
        let output = self
            .copier
            .copy_block(&self.params.file_path, self.params.block_size_kb)
            .await?;
        debug!(
            status = %output.status,
            stdout = %output.stdout.trim_end(),
            "block copy finished"
        );

        check_failure(&output)?;

        if !output.status.success() {
            warn!(status = %output.status, "block copy exited unsuccessfully without a failure message");
        }

        self.parser.parse(&output.stderr).map_err(|err| match err {
            DdBenchError::MalformedOutput(msg) if !output.status.success() => {
                DdBenchError::MalformedOutput(format!("{} ({})", msg, output.status))
            }
            other => other,
        })
    }
}

/// The tool reports errors such as `dd: failed to open ...` on stderr
fn check_failure(output: &CopyOutput) -> Result<()> {
    if output.stderr.contains(FAILURE_MARKER) {
        return Err(DdBenchError::ToolFailed {
            stderr: output.stderr.clone(),
        });
    }
    Ok(())
}
