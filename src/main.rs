//! City demographics dashboard - Entry Point

use citydash::config::{self, ResolvedConfig};
use citydash::engine;
use citydash::model::{AppError, Dataset, Query, SortDirection, SortKey};
use citydash::report::{self, JsonReport};
use citydash::state::AppState;
use citydash::view::{self, ColorConfig};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Indian city demographics: filter, sort and summarize
#[derive(Parser, Debug)]
#[command(name = "citydash")]
#[command(version)]
#[command(about = "Filter, sort and summarize Indian city demographics")]
pub struct Args {
    /// Case-insensitive text matched against city and state names
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only cities in this state (exact name, see --list-states)
    #[arg(long)]
    pub state: Option<String>,

    /// Only cities in this region (exact name, see --list-regions)
    #[arg(long)]
    pub region: Option<String>,

    /// Sort key: population, area, literacy, density or name
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort ascending
    #[arg(long, conflicts_with = "desc")]
    pub asc: bool,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Start the dashboard in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the matching cities as a plain-text table and exit
    #[arg(long, conflicts_with = "json")]
    pub print: bool,

    /// Print the matching cities and summary as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// List the distinct state names and exit
    #[arg(long)]
    pub list_states: bool,

    /// List the distinct region names and exit
    #[arg(long)]
    pub list_regions: bool,
}

impl Args {
    /// Sort key from `--sort`, rejecting unknown names.
    fn sort_override(&self) -> Result<Option<SortKey>, AppError> {
        Ok(self.sort.as_deref().map(str::parse::<SortKey>).transpose()?)
    }

    /// Direction from `--asc`/`--desc`, if either was given.
    fn direction_override(&self) -> Option<SortDirection> {
        if self.asc {
            Some(SortDirection::Ascending)
        } else if self.desc {
            Some(SortDirection::Descending)
        } else {
            None
        }
    }

    /// Initial query from the filter flags and the resolved sort.
    fn query(&self, config: &ResolvedConfig) -> Query {
        let mut query = Query::new().sorted_by(config.sort_key, config.sort_direction);
        if let Some(term) = &self.search {
            query = query.with_search(term.as_str());
        }
        if let Some(state) = &self.state {
            query = query.with_state(state.as_str());
        }
        if let Some(region) = &self.region {
            query = query.with_region(region.as_str());
        }
        query
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Exiting with error");
            eprintln!("citydash: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Reject a bad --sort before touching config or logs.
    let sort_override = args.sort_override()?;

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged)?;
        let dark_override = args.dark.then_some(true);
        config::apply_cli_overrides(with_env, sort_override, args.direction_override(), dark_override)
    };

    citydash::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let dataset = Dataset::bundled();
    let query = args.query(&config);
    let mut stdout = std::io::stdout().lock();

    if args.list_states || args.list_regions {
        if args.list_states {
            write!(stdout, "{}", report::option_list(&dataset.distinct_states()))?;
        }
        if args.list_regions {
            write!(stdout, "{}", report::option_list(&dataset.distinct_regions()))?;
        }
        return Ok(());
    }

    if args.print || args.json {
        let records = engine::run_query(dataset, &query);
        let summary = engine::aggregate(records.iter().copied());
        info!(matches = records.len(), json = args.json, "Writing report");
        if args.json {
            let json = JsonReport::new(&query, &records, &summary, dataset.len()).to_json()?;
            writeln!(stdout, "{json}")?;
        } else {
            write!(
                stdout,
                "{}",
                report::text_report(&records, &summary, dataset.len())
            )?;
        }
        return Ok(());
    }
    drop(stdout);

    let colors = ColorConfig::from_env_and_args(args.no_color);
    let state = AppState::new(dataset, query)
        .with_dark_mode(config.dark_mode)
        .with_comparison_count(config.comparison_count);
    view::run(dataset, state, colors)?;

    Ok(())
}
