use std::path::Path;

use async_trait::async_trait;

use crate::domain::change::ChangeSummary;
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    /// Raw `git status --porcelain` output; empty when the tree is clean.
    async fn porcelain_status(&self) -> AppResult<String>;
    async fn summarize_changes(&self) -> AppResult<ChangeSummary>;
    async fn stage_all(&self) -> AppResult<()>;
    async fn commit_from_file(&self, message_file: &Path) -> AppResult<()>;
    async fn push(&self) -> AppResult<()>;
}
