use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;
use trending_core::{QueryParameters, RefineOptions, SortBy, MAX_COUNT, MIN_COUNT};

#[derive(Parser, Debug)]
#[command(
    name = "trending",
    version,
    about = "Explore trending GitHub repositories",
    long_about = "Explore trending GitHub repositories.\n\nWithout a subcommand, runs the default category search (see 'trending config show')."
)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "TRENDING_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Search API base URL (overrides config file)
    #[arg(long, env = "TRENDING_API_URL", global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Log filter, e.g. "debug" or "github_search=trace" (overrides TRENDING_LOG)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(flatten)]
    pub refine: RefineArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default, PartialEq, Eq)]
pub enum SortArg {
    #[default]
    Stars,
    Forks,
    /// Most recently updated first
    Updated,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Stars => SortBy::Stars,
            SortArg::Forks => SortBy::Forks,
            SortArg::Updated => SortBy::Updated,
        }
    }
}

/// Client-side sort and filter applied to fetched results
#[derive(Args, Debug, Clone, Default)]
pub struct RefineArgs {
    /// Sort results by
    #[arg(long, value_enum, global = true, default_value_t = SortArg::Stars)]
    pub sort: SortArg,

    /// Only show repositories in this language ("all" to disable)
    #[arg(long, short = 'l', global = true)]
    pub language: Option<String>,

    /// Only show repositories whose name or description contains TERM
    #[arg(long, short = 'f', global = true, value_name = "TERM")]
    pub filter: Option<String>,

    /// Hide fetched repositories with fewer stars than this
    #[arg(long, global = true, default_value_t = 0, value_name = "N")]
    pub min_display_stars: u64,
}

impl RefineArgs {
    pub fn to_options(&self) -> RefineOptions {
        RefineOptions {
            sort_by: self.sort.into(),
            language: self.language.clone().unwrap_or_default(),
            search_term: self.filter.clone().unwrap_or_default(),
            min_stars: self.min_display_stars,
        }
    }
}

/// Category search parameters
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Category to search for (defaults to the configured category)
    pub category: Option<String>,

    /// Number of repositories to fetch (5-25)
    #[arg(
        long,
        short = 'n',
        value_parser = clap::value_parser!(u32).range(MIN_COUNT as i64..=MAX_COUNT as i64)
    )]
    pub count: Option<u32>,

    /// Only fetch repositories with more stars than this
    #[arg(long, short = 's', default_value_t = 0, value_name = "N")]
    pub min_stars: u64,
}

impl SearchArgs {
    /// Resolve against the explorer's current parameters for anything not given
    pub fn to_params(&self, current: &QueryParameters) -> QueryParameters {
        QueryParameters::category(
            self.category.as_deref().unwrap_or(&current.category),
            self.count.unwrap_or(current.count),
            self.min_stars,
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search repositories created in the last 30 days by category
    #[command(visible_alias = "s")]
    Search(SearchArgs),
    /// Show the 10 most starred repositories
    #[command(visible_alias = "t")]
    Top {
        /// Star floor to use instead of 10000
        #[arg(long, short = 's', value_name = "N")]
        min_stars: Option<u64>,
    },
    /// List the languages present in a category search's results
    Languages(SearchArgs),
    /// Show the built-in sample repositories
    Samples,
    /// Configuration inspection
    #[command(visible_alias = "cfg")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Show the config file locations that are consulted
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_args_fall_back_to_current_parameters() {
        let cli = Cli::parse_from(["trending", "search", "--min-stars", "100"]);
        let Some(Commands::Search(args)) = cli.command else {
            panic!("expected search command");
        };
        let params = args.to_params(&QueryParameters::category("wasm", 15, 0));
        assert_eq!(params.category, "wasm");
        assert_eq!(params.count, 15);
        assert_eq!(params.min_stars, 100);
    }

    #[test]
    fn count_outside_range_is_rejected() {
        assert!(Cli::try_parse_from(["trending", "search", "rust", "-n", "30"]).is_err());
        assert!(Cli::try_parse_from(["trending", "search", "rust", "-n", "4"]).is_err());
        assert!(Cli::try_parse_from(["trending", "search", "rust", "-n", "25"]).is_ok());
    }

    #[test]
    fn refine_args_are_global() {
        let cli = Cli::parse_from([
            "trending", "top", "--sort", "updated", "-l", "rust", "--filter", "db",
        ]);
        let options = cli.refine.to_options();
        assert_eq!(options.sort_by, SortBy::Updated);
        assert_eq!(options.language, "rust");
        assert_eq!(options.search_term, "db");
        assert_eq!(options.min_stars, 0);
    }
}
