use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::config::ToolConfig;
use crate::Result;

/// Captured output of one block-copy run
#[derive(Debug, Clone)]
pub struct CopyOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the external block-copy tool once per call
#[allow(async_fn_in_trait)]
pub trait BlockCopy {
    /// Write a single block of `block_size_kb` kilobytes of zeros to `target`,
    /// overwriting it, and return the tool's captured output.
    async fn copy_block(&self, target: &Path, block_size_kb: u64) -> Result<CopyOutput>;
}

impl<T: BlockCopy> BlockCopy for &T {
    async fn copy_block(&self, target: &Path, block_size_kb: u64) -> Result<CopyOutput> {
        (**self).copy_block(target, block_size_kb).await
    }
}

/// `dd` with synchronous output (`oflag=dsync`)
#[derive(Debug, Clone)]
pub struct DdCommand {
    program: PathBuf,
}

impl DdCommand {
    pub fn new(config: &ToolConfig) -> Self {
        Self {
            program: config.dd_program.clone(),
        }
    }

    /// Operands for one run, in the order dd receives them
    pub fn operands(target: &Path, block_size_kb: u64) -> Vec<OsString> {
        let mut of = OsString::from("of=");
        of.push(target.as_os_str());

        vec![
            OsString::from("if=/dev/zero"),
            of,
            OsString::from(format!("bs={}KB", block_size_kb)),
            OsString::from("count=1"),
            OsString::from("oflag=dsync"),
        ]
    }
}

impl BlockCopy for DdCommand {
    async fn copy_block(&self, target: &Path, block_size_kb: u64) -> Result<CopyOutput> {
        let operands = Self::operands(target, block_size_kb);
        debug!(program = %self.program.display(), ?operands, "spawning block copy");

        // Pin the locale so the summary line keeps its English layout.
        let output = Command::new(&self.program)
            .args(&operands)
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        Ok(CopyOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operands() {
        let operands = DdCommand::operands(Path::new("/mnt/disk/out.bin"), 64);
        let operands: Vec<String> = operands
            .into_iter()
            .map(|o| o.into_string().unwrap())
            .collect();
        assert_eq!(
            operands,
            vec![
                "if=/dev/zero",
                "of=/mnt/disk/out.bin",
                "bs=64KB",
                "count=1",
                "oflag=dsync"
            ]
        );
    }

    #[test]
    fn test_path_with_spaces_is_one_operand() {
        let operands = DdCommand::operands(Path::new("/tmp/my file"), 1);
        assert_eq!(operands[1], OsString::from("of=/tmp/my file"));
        assert_eq!(operands.len(), 5);
    }

    #[test]
    fn test_program_from_config() {
        let config = ToolConfig::default().with_dd_program(PathBuf::from("/opt/bin/dd"));
        assert_eq!(DdCommand::new(&config).program, PathBuf::from("/opt/bin/dd"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_missing_program_is_io_error() {
        let config = ToolConfig::default()
            .with_dd_program(PathBuf::from("/nonexistent/ddbench-no-such-dd"));
        let dir = tempfile::tempdir().unwrap();
        let err = DdCommand::new(&config)
            .copy_block(&dir.path().join("out"), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, crate::DdBenchError::IoError(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_captures_stderr() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-dd");
        std::fs::write(
            &script,
            "#!/bin/sh\necho \"$LC_ALL $2\" >&2\necho out\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let config = ToolConfig::default().with_dd_program(script);
        let target = dir.path().join("target.bin");
        let output = DdCommand::new(&config).copy_block(&target, 2).await.unwrap();

        assert!(output.status.success());
        assert_eq!(output.stdout, "out\n");
        assert_eq!(
            output.stderr,
            format!("C of={}\n", target.display())
        );
    }
}
