use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{CredentialProvider, LanguageModelService, Prompter, VersionControlService};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub version_control: Arc<dyn VersionControlService>,
    pub credentials: Arc<dyn CredentialProvider>,
    pub language_model: Arc<dyn LanguageModelService>,
    pub prompter: Arc<dyn Prompter>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        version_control: Arc<dyn VersionControlService>,
        credentials: Arc<dyn CredentialProvider>,
        language_model: Arc<dyn LanguageModelService>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        Self {
            config,
            version_control,
            credentials,
            language_model,
            prompter,
        }
    }
}
