use std::process;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;

use relnotes::cli_args::Cli;
use relnotes::config::Config;
use relnotes::llm::GitHubModelsClient;
use relnotes::llm::{prompt_builder, prompts};
use relnotes::logging;

fn main() {
    // clap exits 2 on bad arguments by default; every failure here must be
    // exit 1, with 0 reserved for help output.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayHelp => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    logging::init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;

    let Some(prompt) = prompt_builder::release_notes_prompt(
        &config.repo_owner,
        &config.repo_name,
        &config.version,
        &config.commits,
    ) else {
        // Nothing to summarize. Expected outcome, not an error, but the run
        // still fails so CI does not publish empty notes.
        eprintln!("{}", prompts::NO_COMMITS_NOTICE);
        process::exit(1);
    };

    log::info!(
        "Generating release notes for {}/{} {} over {} commit(s)",
        config.repo_owner,
        config.repo_name,
        config.version,
        config.commits.len()
    );

    let client = GitHubModelsClient::new(config.github_token.clone(), config.model.clone());
    let notes = client.generate_release_notes(&prompt)?;

    println!("{notes}");
    Ok(())
}
