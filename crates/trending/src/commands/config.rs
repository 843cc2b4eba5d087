use crate::cli::{ConfigCommands, OutputFormat};
use crate::config::{config_paths, Config};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct ConfigPath {
    path: PathBuf,
    exists: bool,
}

pub fn handle_config(
    action: ConfigCommands,
    config_path: Option<PathBuf>,
    cli_api_url: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let mut config = Config::load(config_path)?;
            config.merge_with_cli(cli_api_url);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
                OutputFormat::Text => print!("{}", toml::to_string_pretty(&config)?),
            }
            Ok(())
        }
        ConfigCommands::Path => {
            let paths: Vec<ConfigPath> = config_paths(config_path.as_deref())
                .into_iter()
                .map(|path| ConfigPath {
                    exists: path.exists(),
                    path,
                })
                .collect();
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&paths)?),
                OutputFormat::Text => {
                    for entry in &paths {
                        let marker = if entry.exists {
                            "(found)".green().to_string()
                        } else {
                            "(missing)".dimmed().to_string()
                        };
                        println!("{} {}", entry.path.display(), marker);
                    }
                }
            }
            Ok(())
        }
    }
}
