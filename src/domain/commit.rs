use once_cell::sync::Lazy;
use regex::Regex;

static REASONING_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<think>.*?</think>").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMessage(pub String);

impl CommitMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Builds a message from raw model output, see [`clean_commit_message`].
    pub fn from_model_output(raw: &str) -> Self {
        Self(clean_commit_message(raw))
    }
}

/// Strips reasoning blocks, then drops blank lines and any line opening with `<`.
///
/// The `<` rule also removes unrelated lines such as `<br>` or `<T>` that
/// happen to start a line.
pub fn clean_commit_message(raw: &str) -> String {
    let without_reasoning = REASONING_BLOCK.replace_all(raw, "");
    without_reasoning
        .split('\n')
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('<')
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
