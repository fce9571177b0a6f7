use crate::error::AppResult;

/// Single-line interactive input.
pub trait Prompter: Send + Sync {
    /// Shows `prompt` and returns the trimmed answer.
    fn ask(&self, prompt: &str) -> AppResult<String>;
}
