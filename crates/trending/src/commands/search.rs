use crate::cli::{Commands, OutputFormat, RefineArgs, SearchArgs};
use crate::output::{
    output_languages, output_results, output_search_error, ResultSource, ResultsView,
};
use anyhow::Result;
use std::process::ExitCode;
use trending_core::{
    refine, sample_repositories, Explorer, QueryParameters, Repository, RepositorySearch,
    SearchMode,
};

/// Run the search (or sample display) selected on the command line and render it
pub fn handle_search<S: RepositorySearch>(
    explorer: &mut Explorer<S>,
    command: Option<&Commands>,
    refine_args: &RefineArgs,
    format: OutputFormat,
) -> Result<ExitCode> {
    let outcome = match command {
        None => match explorer.activate() {
            Some(outcome) => outcome,
            None => explorer.refresh(),
        },
        Some(Commands::Search(args)) => search_category(explorer, args),
        Some(Commands::Languages(args)) => {
            if search_category(explorer, args).is_err() {
                return Ok(report_failure(explorer, format));
            }
            output_languages(&explorer.languages(), format);
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Top { min_stars }) => match min_stars {
            Some(min_stars) if *min_stars > 0 => explorer.search(QueryParameters {
                min_stars: *min_stars,
                ..QueryParameters::top_stars()
            }),
            _ => explorer.switch_to_top_stars(),
        },
        Some(Commands::Samples) => {
            render_samples(refine_args, format);
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Config { .. }) | Some(Commands::Completions { .. }) => {
            unreachable!("handled before the explorer is built")
        }
    };

    if outcome.is_err() {
        return Ok(report_failure(explorer, format));
    }

    render(explorer, refine_args, format);
    Ok(ExitCode::SUCCESS)
}

fn search_category<S: RepositorySearch>(
    explorer: &mut Explorer<S>,
    args: &SearchArgs,
) -> trending_core::Result<Vec<Repository>> {
    let params = args.to_params(explorer.params());
    explorer.search(params)
}

fn report_failure<S: RepositorySearch>(explorer: &Explorer<S>, format: OutputFormat) -> ExitCode {
    if let Some(message) = explorer.error() {
        output_search_error(message, format);
    }
    ExitCode::from(1)
}

fn render<S: RepositorySearch>(
    explorer: &Explorer<S>,
    refine_args: &RefineArgs,
    format: OutputFormat,
) {
    let visible = explorer.visible();
    let refined = refine(visible, &refine_args.to_options());
    let params = explorer.params();

    let source = if explorer.showing_samples() {
        ResultSource::SampleFallback
    } else {
        ResultSource::Search
    };

    let view = ResultsView {
        mode: params.search_mode,
        category: &params.category,
        total_count: explorer.total_count(),
        fetched: visible.len(),
        source,
        repositories: &refined,
    };
    output_results(&view, format);
}

/// Show the built-in samples regardless of the empty-result fallback setting
fn render_samples(refine_args: &RefineArgs, format: OutputFormat) {
    let samples = sample_repositories();
    let refined = refine(&samples, &refine_args.to_options());

    let view = ResultsView {
        mode: SearchMode::Category,
        category: "",
        total_count: samples.len() as u64,
        fetched: samples.len(),
        source: ResultSource::Samples,
        repositories: &refined,
    };
    output_results(&view, format);
}
