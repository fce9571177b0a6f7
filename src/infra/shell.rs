use std::path::PathBuf;
use std::process::Output;

use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Largest stdout or stderr capture accepted from a single command.
pub const MAX_OUTPUT_BYTES: usize = 100 * 1024 * 1024;

#[derive(Debug, Clone, Default)]
pub struct ShellOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, Clone)]
pub struct ShellExecutor {
    workspace_root: PathBuf,
}

impl ShellExecutor {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    /// Runs `program` with `args` directly, without a shell in between.
    pub async fn run(&self, program: &str, args: &[&str]) -> AppResult<ShellOutput> {
        let label = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        debug!(command = %label, "running command");

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.workspace_root)
            .output()
            .await?;

        capture(label, output)
    }

    /// Runs a composite command line through `sh -c`.
    pub async fn run_script(&self, script: &str) -> AppResult<ShellOutput> {
        debug!(script = %script.trim(), "running script");

        let output = Command::new("sh")
            .arg("-c")
            .arg(script)
            .current_dir(&self.workspace_root)
            .output()
            .await?;

        capture(script.trim().to_string(), output)
    }
}

fn capture(command: String, output: Output) -> AppResult<ShellOutput> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.stdout.len() > MAX_OUTPUT_BYTES || output.stderr.len() > MAX_OUTPUT_BYTES {
        return Err(AppError::Command {
            command,
            code: output.status.code(),
            stdout: String::new(),
            stderr: format!("output exceeded {MAX_OUTPUT_BYTES} bytes"),
        });
    }

    if !output.status.success() {
        debug!(command = %command, code = ?output.status.code(), "command failed");
        return Err(AppError::Command {
            command,
            code: output.status.code(),
            stdout,
            stderr,
        });
    }

    Ok(ShellOutput { stdout, stderr })
}
