pub mod git;
pub mod llm;
pub mod profile;
pub mod shell;
pub mod terminal;
