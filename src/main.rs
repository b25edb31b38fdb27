//! Drillbook CLI application entry point
//!
//! The binary is a thin shell over the scenario engine: it parses arguments,
//! loads configuration and the dataset, runs one command against a browse
//! session, and renders the result.
//!
//! # Usage
//!
//! ```bash
//! # List the first page of scenarios (default command)
//! drillbook
//! drillbook list
//!
//! # Search, optionally restricted to a tag
//! drillbook list ransomware --tag malware
//! drillbook list --tag vendor --page 2
//!
//! # Show the derived tag vocabulary
//! drillbook tags
//!
//! # Draw a random scenario from the filtered pool
//! drillbook random --tag phishing
//!
//! # Show one scenario by id
//! drillbook show 14
//!
//! # Browse an external scenario file, once or persistently
//! drillbook --dataset ./my-scenarios.json list
//! drillbook config set-dataset ./my-scenarios.json
//! ```

use colored::Colorize;
use drillbook::{
    DrillbookError,
    classify::KeywordTable,
    cli::{Cli, Commands, ConfigCommands},
    config::DrillbookConfig,
    dataset::Dataset,
    output::{self, OutputWriter, StdoutWriter},
    query::FilterState,
    session::Session,
};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, DrillbookError>;

fn main() {
    if let Err(error) = run() {
        eprintln!("{} {error}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = DrillbookConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let writer = StdoutWriter::new(quiet);
    let dataset_override = cli.dataset.clone();

    match cli.command() {
        Commands::Config { command } => run_config(command, config, &writer),
        command => run_browse(command, dataset_override, &config, &writer),
    }
}

/// Apply a configuration command and persist the result
fn run_config(
    command: ConfigCommands,
    mut config: DrillbookConfig,
    writer: &impl OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(&config).map_err(|e| {
                DrillbookError::InvalidInput(format!("cannot render configuration: {e}"))
            })?;
            writer.write(rendered.trim_end());
            return Ok(());
        }
        ConfigCommands::SetDataset { path } => {
            config.dataset_path = Some(path);
        }
        ConfigCommands::ClearDataset => {
            config.dataset_path = None;
        }
        ConfigCommands::SetPageSize { size } => {
            if size == 0 {
                return Err(DrillbookError::InvalidInput(
                    "page size must be at least 1".to_string(),
                ));
            }
            config.page_size = size;
        }
    }

    config.save()?;
    writer.info("Configuration saved.");
    Ok(())
}

/// Run a browsing command against a freshly loaded dataset
fn run_browse(
    command: Commands,
    dataset_override: Option<PathBuf>,
    config: &DrillbookConfig,
    writer: &impl OutputWriter,
) -> Result<()> {
    let table = KeywordTable::builtin();
    let dataset = match dataset_override.as_deref().or(config.dataset_path.as_deref()) {
        Some(path) => Dataset::load(path, &table)?,
        None => Dataset::bundled(&table)?,
    };

    for issue in dataset.validate() {
        writer.warning(&issue.to_string());
    }

    let mut session = Session::with_page_size(dataset, config.page_size.max(1));

    match command {
        Commands::List { filter, page } => {
            session.set_filter(FilterState::from(filter));
            session.set_page(page);
            writer.write(&output::render_view(&session.view()));
        }
        Commands::Tags => {
            let dataset = session.dataset();
            let vocabulary = dataset.vocabulary();
            if vocabulary.is_empty() {
                writer.info("No tags: the dataset is empty.");
            }
            for tag in vocabulary {
                let count = dataset.count_tag(&tag);
                writer.write(&format!("{tag} ({count})"));
            }
        }
        Commands::Random { filter } => {
            session.set_filter(FilterState::from(filter));
            match session.pick_random() {
                Some(scenario) => writer.write(&output::render_scenario(scenario, "")),
                None => writer.info("The dataset is empty; nothing to draw."),
            }
        }
        Commands::Show { id } => match session.dataset().get(id) {
            Some(scenario) => writer.write(&output::render_scenario(scenario, "")),
            None => {
                return Err(DrillbookError::InvalidInput(format!(
                    "no scenario with id {id}"
                )));
            }
        },
        Commands::Config { .. } => unreachable!("handled before dataset loading"),
    }

    Ok(())
}
