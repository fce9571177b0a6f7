use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::config::CredentialSettings;
use crate::error::{AppError, AppResult};
use crate::services::{CredentialProvider, Prompter};

const KEY_PROMPT: &str = "Enter your Groq API key (it will be saved to your shell profile):\n> ";

/// Resolves the API key from the environment, or asks for it once and
/// exports it from the user's shell profile.
pub struct ShellProfileCredentials {
    settings: CredentialSettings,
    prompter: Arc<dyn Prompter>,
}

impl ShellProfileCredentials {
    pub fn new(settings: CredentialSettings, prompter: Arc<dyn Prompter>) -> Self {
        Self { settings, prompter }
    }
}

#[async_trait]
impl CredentialProvider for ShellProfileCredentials {
    async fn api_key(&self) -> AppResult<String> {
        if let Some(key) = self.settings.env_value.as_deref().filter(|k| !k.is_empty()) {
            return Ok(key.to_string());
        }

        let key = self.prompter.ask(KEY_PROMPT)?;
        if key.is_empty() {
            return Err(AppError::EmptyCredential);
        }

        let home = self.settings.home_dir.as_deref().ok_or_else(|| {
            AppError::Configuration("unable to determine home directory".to_string())
        })?;
        let file_name = profile_file_name(&self.settings.shell);
        let path = home.join(file_name);

        persist_export(&path, &export_line(&self.settings.var_name, &key))?;

        println!(
            "Saved to {}. Open a new terminal or run \"source ~/{file_name}\" to load it now.",
            path.display()
        );
        Ok(key)
    }
}

pub fn profile_file_name(shell: &str) -> &'static str {
    if shell.contains("zsh") {
        ".zshrc"
    } else {
        ".bashrc"
    }
}

pub fn export_line(var_name: &str, value: &str) -> String {
    format!("export {var_name}=\"{value}\"")
}

/// Appends `line` to the profile unless the file already contains it.
///
/// Containment is a plain substring test; the same key exported with other
/// quoting is not recognised. Returns whether anything was written.
pub fn persist_export(path: &Path, line: &str) -> AppResult<bool> {
    let existing = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => return Err(AppError::Io(err)),
    };

    if existing.contains(line) {
        debug!(path = %path.display(), "export line already present");
        return Ok(false);
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "\n{line}\n")?;
    debug!(path = %path.display(), "appended export line");
    Ok(true)
}
