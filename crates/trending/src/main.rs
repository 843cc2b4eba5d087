mod cli;
mod color;
mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use config::Config;
use github_search::GitHubClient;
use output::output_error;
use std::process::ExitCode;
use trending_core::{sample_repositories, Explorer};

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);

    let format = cli.format;
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output_error(&e, format);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    // Commands that don't need the search API
    match &cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "trending", &mut std::io::stdout());
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Config { action }) => {
            commands::config::handle_config(
                *action,
                cli.config.clone(),
                cli.api_url.clone(),
                cli.format,
            )?;
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.api_url.clone());
    config.validate()?;

    logging::init(cli.log_level.as_deref(), config.log_level.as_deref());
    tracing::debug!(api_url = %config.api_url, "configuration loaded");

    let samples = if config.show_samples_when_empty {
        sample_repositories()
    } else {
        Vec::new()
    };

    let client = GitHubClient::with_base_url(&config.api_url);
    let mut explorer =
        Explorer::new(&client, samples).with_initial_params(config.initial_params());

    commands::search::handle_search(&mut explorer, cli.command.as_ref(), &cli.refine, cli.format)
}
