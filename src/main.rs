mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::ffi::OsString;
use std::sync::Arc;

use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::infra::git::GitCli;
use crate::infra::llm::GroqClient;
use crate::infra::profile::ShellProfileCredentials;
use crate::infra::terminal::StdioPrompter;
use crate::services::Prompter;
use crate::workflow::commit::{CommitOutcome, commit_and_push};

/// Stages, commits and pushes every change in the current repository with a
/// commit message drafted by a Groq-hosted model.
#[derive(Parser)]
#[command(name = "aigit", author, version, about)]
struct Cli {}

/// Returns clap's help or version output when requested. Any other argument
/// is ignored so a run only ever exits with 0 or 1.
fn help_or_version<I, T>(args: I) -> Option<clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Some(err)
        }
        _ => None,
    }
}

#[tokio::main]
async fn main() {
    if let Some(info) = help_or_version(std::env::args_os()) {
        info.exit();
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("aigit=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(error) = run().await {
        if let AppError::Command { stdout, .. } = &error {
            if !stdout.trim().is_empty() {
                eprintln!("{}", stdout.trim_end());
            }
        }
        eprintln!("Process failed: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    let prompter: Arc<dyn Prompter> = Arc::new(StdioPrompter::new());
    let credentials = Arc::new(ShellProfileCredentials::new(
        config.credential_settings(),
        prompter.clone(),
    ));
    let language_model = Arc::new(GroqClient::new(config.api_url.clone(), config.model.clone()));
    let git = Arc::new(GitCli::new(config.workspace_root.clone()));

    let context = AppContext::new(config, git, credentials, language_model, prompter);

    println!("Starting git operations...");
    match commit_and_push(&context).await? {
        CommitOutcome::NothingToCommit => println!("No changes to commit"),
        CommitOutcome::Committed { message } => {
            debug!(subject = message.as_str().lines().next().unwrap_or_default(), "committed");
            println!("Done.");
        }
    }

    Ok(())
}
