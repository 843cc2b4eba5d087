use crate::cli::OutputFormat;
use crate::color::language_color;
use colored::Colorize;
use serde::Serialize;
use trending_core::refine::parse_timestamp;
use trending_core::{Repository, SearchMode};

/// Where the displayed repositories came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultSource {
    Search,
    /// The search returned nothing and the samples are shown instead
    SampleFallback,
    /// The samples were asked for explicitly
    Samples,
}

/// Everything the text and JSON renderers need for one result screen
#[derive(Debug, Serialize)]
pub struct ResultsView<'a> {
    pub mode: SearchMode,
    pub category: &'a str,
    pub total_count: u64,
    /// Size of the list before client-side refinement
    pub fetched: usize,
    pub source: ResultSource,
    pub repositories: &'a [Repository],
}

impl ResultsView<'_> {
    pub fn heading(&self) -> String {
        if self.source != ResultSource::Search {
            return "Sample Repositories".to_string();
        }
        match self.mode {
            SearchMode::TopStars => "Top 10 Starred Repositories".to_string(),
            SearchMode::Category => format!("Trending {} Repositories", self.category),
        }
    }

    pub fn subheading(&self) -> String {
        match self.source {
            ResultSource::SampleFallback => {
                return "No repositories found; showing sample repositories instead".to_string();
            }
            ResultSource::Samples => {
                return format!("Showing {} sample repositories", self.fetched);
            }
            ResultSource::Search => {}
        }
        match self.mode {
            SearchMode::TopStars => {
                "The most popular repositories on GitHub by star count".to_string()
            }
            SearchMode::Category => format!(
                "Showing {} trending repositories for \"{}\"",
                self.fetched, self.category
            ),
        }
    }
}

pub fn output_results(view: &ResultsView, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(view) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", view.heading().white().bold());
            println!("{}", view.subheading().dimmed());
            println!();
            if view.repositories.is_empty() {
                println!("{}", "No repositories match the current filters.".yellow());
                return;
            }
            for repo in view.repositories {
                println!("{}", repo.display());
                println!();
            }
        }
    }
}

pub fn output_languages(languages: &[String], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(languages) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            for language in languages {
                println!("{}", language.color(language_color(language)));
            }
        }
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

fn print_error(code: &str, message: &str, format: OutputFormat) {
    let rendered = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: code.to_string(),
                message: message.to_string(),
            };
            serde_json::to_string_pretty(&json_err).unwrap_or_else(|_| {
                format!(r#"{{"error": true, "message": "{}"}}"#, message)
            })
        }
        OutputFormat::Text => format!("{}: {}", "Error".red().bold(), message),
    };
    eprintln!("{}", rendered);
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    print_error("error", &format!("{:#}", err), format);
}

/// Report a failed search using only its user-visible message
pub fn output_search_error(message: &str, format: OutputFormat) {
    print_error("search_failed", message, format);
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl Displayable for Repository {
    fn display(&self) -> String {
        let mut output = format!(
            "{} {} {}\n  {}\n  {} {}   {} {}   {} {}",
            self.name.cyan().bold(),
            format!("by {}", self.owner.login).dimmed(),
            format!("[{}]", self.language).color(language_color(&self.language)),
            self.description,
            "Stars".dimmed(),
            format_count(self.stars).yellow(),
            "Forks".dimmed(),
            format_count(self.forks),
            "Watchers".dimmed(),
            format_count(self.watchers),
        );

        let created = format_date(&self.created_at);
        if !created.is_empty() {
            output.push_str(&format!("\n  {}: {}", "Created".dimmed(), created));
        }
        let updated = format_date(&self.updated_at);
        if !updated.is_empty() {
            output.push_str(&format!("\n  {}: {}", "Updated".dimmed(), updated));
        }

        output.push_str(&format!("\n  {}", summary(self).dimmed()));
        output.push_str(&format!("\n  {}: {}", "URL".dimmed(), self.url.underline()));
        output.push_str(&format!("\n  {}: {}", "Readme".dimmed(), self.readme_url));
        output
    }
}

/// One-sentence history of a repository
pub fn summary(repo: &Repository) -> String {
    let language = if repo.language.is_empty() {
        String::new()
    } else {
        format!("{} ", repo.language)
    };
    format!(
        "Created on {}. This {}repository has gained {} stars and been forked {} times.",
        format_date(&repo.created_at),
        language,
        format_count(repo.stars),
        format_count(repo.forks)
    )
}

/// Compact count: `999`, `1.2K`, `3.4M`
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// `Mar 5, 2024`; unparseable input is returned as is
pub fn format_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trending_core::sample_repositories;

    #[test]
    fn compact_counts() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(45_000), "45.0K");
        assert_eq!(format_count(175_000), "175.0K");
        assert_eq!(format_count(2_345_678), "2.3M");
    }

    #[test]
    fn dates_render_month_day_year() {
        assert_eq!(format_date("2024-03-05T10:00:00Z"), "Mar 5, 2024");
        assert_eq!(format_date("2023-06-20"), "Jun 20, 2023");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn summary_mentions_language_and_counts() {
        let repo = &sample_repositories()[2];
        assert_eq!(
            summary(repo),
            "Created on Nov 7, 2015. This C++ repository has gained 175.0K stars and been forked 87.0K times."
        );
    }

    #[test]
    fn headings_follow_mode() {
        let repos = sample_repositories();
        let mut view = ResultsView {
            mode: SearchMode::Category,
            category: "rust",
            total_count: 120,
            fetched: 5,
            source: ResultSource::Search,
            repositories: &repos,
        };
        assert_eq!(view.heading(), "Trending rust Repositories");
        assert_eq!(view.subheading(), "Showing 5 trending repositories for \"rust\"");

        view.mode = SearchMode::TopStars;
        assert_eq!(view.heading(), "Top 10 Starred Repositories");

        view.source = ResultSource::SampleFallback;
        assert_eq!(view.heading(), "Sample Repositories");
        assert!(view.subheading().starts_with("No repositories found"));

        view.source = ResultSource::Samples;
        assert_eq!(view.heading(), "Sample Repositories");
        assert_eq!(view.subheading(), "Showing 5 sample repositories");
    }

    #[test]
    fn card_contains_links() {
        colored::control::set_override(false);
        let repo = &sample_repositories()[0];
        let card = repo.display();
        assert!(card.contains("openai/gpt-4 by openai [Python]"));
        assert!(card.contains("Stars 45.0K"));
        assert!(card.contains("Created: Jan 15, 2023"));
        assert!(card.contains("Updated: Jun 20, 2023"));
        assert!(card.contains("https://github.com/openai/gpt-4/blob/main/README.md"));
    }
}
