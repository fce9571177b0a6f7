use async_trait::async_trait;

use crate::domain::change::ChangeSummary;
use crate::domain::commit::CommitMessage;
use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// May return an empty message when the model produced nothing usable.
    async fn generate_commit_message(
        &self,
        changes: &ChangeSummary,
        api_key: &str,
    ) -> AppResult<CommitMessage>;
}
