use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::change::{ChangeSummary, SUMMARY_SCRIPT};
use crate::error::{AppError, AppResult};
use crate::infra::shell::ShellExecutor;
use crate::services::VersionControlService;

pub struct GitCli {
    shell: ShellExecutor,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self {
            shell: ShellExecutor::new(workspace_root),
        }
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn porcelain_status(&self) -> AppResult<String> {
        let output = self.shell.run("git", &["status", "--porcelain"]).await?;
        Ok(output.stdout)
    }

    async fn summarize_changes(&self) -> AppResult<ChangeSummary> {
        let output = self.shell.run_script(SUMMARY_SCRIPT).await?;
        Ok(ChangeSummary::new(output.stdout))
    }

    async fn stage_all(&self) -> AppResult<()> {
        self.shell.run("git", &["add", "."]).await?;
        Ok(())
    }

    async fn commit_from_file(&self, message_file: &Path) -> AppResult<()> {
        let path = message_file.to_str().ok_or_else(|| {
            AppError::Configuration(format!(
                "commit message path is not valid UTF-8: {}",
                message_file.display()
            ))
        })?;
        self.shell.run("git", &["commit", "-F", path]).await?;
        Ok(())
    }

    async fn push(&self) -> AppResult<()> {
        let output = self.shell.run("git", &["push"]).await?;
        debug!(report = %output.stderr.trim(), "pushed");
        Ok(())
    }
}
