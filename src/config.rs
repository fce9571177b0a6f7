use std::env;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub shell: String,
    pub home_dir: Option<PathBuf>,
    pub api_url: String,
    pub model: String,
    pub temp_dir: PathBuf,
    pub workspace_root: PathBuf,
}

/// Inputs the credential loader needs, resolved up front so the loader
/// never touches the process environment itself.
#[derive(Debug, Clone)]
pub struct CredentialSettings {
    pub var_name: String,
    pub env_value: Option<String>,
    pub shell: String,
    pub home_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn load(workspace_root: &Path) -> AppResult<Self> {
        Ok(Self {
            api_key: non_empty_var(API_KEY_VAR),
            shell: env::var("SHELL").unwrap_or_default(),
            home_dir: dirs::home_dir(),
            api_url: non_empty_var("AIGIT_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            model: non_empty_var("AIGIT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temp_dir: env::temp_dir(),
            workspace_root: workspace_root.to_path_buf(),
        })
    }

    pub fn credential_settings(&self) -> CredentialSettings {
        CredentialSettings {
            var_name: API_KEY_VAR.to_string(),
            env_value: self.api_key.clone(),
            shell: self.shell.clone(),
            home_dir: self.home_dir.clone(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
