pub mod github;
pub mod prompt_builder;
pub mod prompts;

pub use github::GitHubModelsClient;
