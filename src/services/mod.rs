pub mod credentials;
pub mod language_model;
pub mod prompter;
pub mod version_control;

pub use credentials::CredentialProvider;
pub use language_model::LanguageModelService;
pub use prompter::Prompter;
pub use version_control::VersionControlService;
