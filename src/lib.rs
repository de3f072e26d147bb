//! Release notes generator backed by the GitHub Models API.
//!
//! One linear pipeline: parse CLI flags, render a fixed prompt over the
//! supplied commit list, POST it to the chat completions endpoint, print the
//! returned markdown.
pub mod cli_args;
pub mod config;
pub mod error;
pub mod llm;
pub mod logging;

pub use cli_args::Cli;
pub use config::{Commit, Config};
pub use error::RelnotesError;
