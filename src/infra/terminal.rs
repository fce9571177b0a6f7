use std::io::{self, BufRead, Write};

use crate::error::AppResult;
use crate::services::Prompter;

pub struct StdioPrompter;

impl StdioPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for StdioPrompter {
    fn ask(&self, prompt: &str) -> AppResult<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;

        read_answer(io::stdin().lock())
    }
}

fn read_answer(mut reader: impl BufRead) -> AppResult<String> {
    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_string())
}
