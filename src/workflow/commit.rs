use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, warn};

use crate::context::AppContext;
use crate::domain::commit::CommitMessage;
use crate::error::{AppError, AppResult};

const MANUAL_PROMPT: &str = "Enter a commit message:\n> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    NothingToCommit,
    Committed { message: CommitMessage },
}

/// Summarizes local changes, obtains a commit message (model first, user as
/// fallback), then stages everything, commits and pushes.
///
/// Only the generation step is allowed to fail softly. A failed commit or
/// push is returned as-is; nothing is rolled back.
pub async fn commit_and_push(ctx: &AppContext) -> AppResult<CommitOutcome> {
    let status = ctx.version_control.porcelain_status().await?;
    if status.is_empty() {
        return Ok(CommitOutcome::NothingToCommit);
    }

    let changes = ctx.version_control.summarize_changes().await?;
    let api_key = ctx.credentials.api_key().await?;

    let mut message = match ctx
        .language_model
        .generate_commit_message(&changes, &api_key)
        .await
    {
        Ok(message) => {
            println!("AI commit message:\n{}", message.as_str());
            message
        }
        Err(error) => {
            eprintln!("{}", generation_warning(&error));
            CommitMessage::default()
        }
    };

    if message.is_empty() {
        message = CommitMessage(ctx.prompter.ask(MANUAL_PROMPT)?);
    }

    let message_file = MessageFile::create(&ctx.config.temp_dir, &message)?;
    ctx.version_control.stage_all().await?;
    ctx.version_control.commit_from_file(message_file.path()).await?;
    ctx.version_control.push().await?;

    Ok(CommitOutcome::Committed { message })
}

/// User-facing line reported when the model could not produce a message.
pub fn generation_warning(error: &AppError) -> String {
    format!("Warning: AI commit message failed: {error}")
}

/// Commit message written to a scratch file for `git commit -F`; the file is
/// removed when this value is dropped, whatever happened to the commit.
struct MessageFile {
    path: PathBuf,
}

impl MessageFile {
    fn create(dir: &Path, message: &CommitMessage) -> AppResult<Self> {
        let path = dir.join(format!("commit_{}.txt", Utc::now().timestamp_millis()));
        Self::create_at(path, message)
    }

    /// Fails if anything already exists at `path`, so a stale file or symlink
    /// is never overwritten and never removed by this guard.
    fn create_at(path: PathBuf, message: &CommitMessage) -> AppResult<Self> {
        let mut file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        file.write_all(message.as_str().as_bytes())?;
        debug!(path = %path.display(), "wrote commit message file");
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for MessageFile {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            warn!("Failed to remove {}: {}", self.path.display(), err);
        }
    }
}
