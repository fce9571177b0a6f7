use async_trait::async_trait;

use crate::error::AppResult;

#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn api_key(&self) -> AppResult<String>;
}
