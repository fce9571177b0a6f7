use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("command `{command}` failed ({}): {}", exit_label(.code), .stderr.trim())]
    Command {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
    #[error("Empty key, aborting.")]
    EmptyCredential,
    #[error("Groq API error {status}: {body}")]
    RemoteService { status: u16, body: String },
    #[error("language model error: {0}")]
    LanguageModel(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    code.map_or("terminated by signal".to_string(), |c| format!("exit code {c}"))
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_reports_exit_code_and_stderr() {
        let error = AppError::Command {
            command: "git push".to_string(),
            code: Some(128),
            stdout: String::new(),
            stderr: "fatal: no upstream\n".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "command `git push` failed (exit code 128): fatal: no upstream"
        );
    }

    #[test]
    fn remote_error_includes_status_and_body() {
        let error = AppError::RemoteService {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "Groq API error 500: boom");
    }
}
