use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use github_search::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trending_core::{clamp_count, QueryParameters, DEFAULT_CATEGORY, DEFAULT_COUNT};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Base URL of the search API
    pub api_url: String,
    /// Category searched when none is given
    pub default_category: String,
    /// Page size used when none is given (5-25)
    pub default_count: u32,
    /// Log filter used when neither --log-level nor TRENDING_LOG is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    /// Display the sample repositories when a search returns nothing
    pub show_samples_when_empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
            default_count: DEFAULT_COUNT,
            log_level: None,
            show_samples_when_empty: true,
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        Self::figment(explicit_path)
            .extract::<Config>()
            .map(Config::normalized)
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    fn figment(explicit_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment.merge(Env::prefixed("TRENDING_").only(&[
            "api_url",
            "default_category",
            "default_count",
            "show_samples_when_empty",
        ]))
    }

    fn normalized(mut self) -> Self {
        self.default_count = clamp_count(self.default_count);
        self.api_url = self.api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn merge_with_cli(&mut self, cli_api_url: Option<String>) {
        if let Some(url) = cli_api_url {
            self.api_url = url.trim_end_matches('/').to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(anyhow!(
                "Invalid API URL '{}'. Set via --api-url, TRENDING_API_URL env var, or config file",
                self.api_url
            ));
        }
        if self.default_category.trim().is_empty() {
            return Err(anyhow!("default_category must not be empty"));
        }
        Ok(())
    }

    /// Parameters of the search fired when the explorer starts
    pub fn initial_params(&self) -> QueryParameters {
        QueryParameters::category(&self.default_category, self.default_count, 0)
    }
}

/// Config files consulted, in merge order
pub fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "trending").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("trending").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("trending")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join("trending.toml"))
}
