//! Command-line interface definitions and parsing
//!
//! Defines the CLI surface for drillbook using the `clap` derive API.
//!
//! # Commands
//!
//! - **list**: print a page of scenarios matching a search and/or tag (default)
//! - **tags**: print the derived tag vocabulary with scenario counts
//! - **random**: draw one random scenario from the filtered pool
//! - **show**: print a single scenario by id
//! - **config**: inspect or change the stored configuration
//!
//! # Design features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--dataset` flag to browse an external scenario file
//! - Command aliases (`ls`, `t`, `r`, `s`)

use crate::query::{FilterState, TagFilter};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Browse a library of incident-response tabletop scenarios
#[derive(Parser, Debug)]
#[command(name = "drillbook", version, about)]
pub struct Cli {
    /// Suppress warnings and informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Load scenarios from a JSON file instead of the bundled set
    #[arg(long, global = true, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The command to run, defaulting to an unfiltered first-page listing
    #[must_use]
    pub fn command(self) -> Commands {
        self.command.unwrap_or(Commands::List {
            filter: FilterArgs {
                query: None,
                tag: None,
            },
            page: 1,
        })
    }
}

/// Search criteria shared by the listing and random commands
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Free-text search over titles and descriptions
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Restrict to one tag ("all" disables the restriction)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Option<String>,
}

impl From<FilterArgs> for FilterState {
    fn from(args: FilterArgs) -> Self {
        Self::new(args.query.unwrap_or_default(), TagFilter::from(args.tag))
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List scenarios matching a search and/or tag filter
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Page number to display
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show the tag vocabulary with scenario counts
    #[command(visible_alias = "t")]
    Tags,

    /// Draw one random scenario from the filtered pool
    #[command(visible_alias = "r")]
    Random {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show a single scenario by id
    #[command(visible_alias = "s")]
    Show {
        /// Scenario id
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Inspect or change the stored configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the active configuration
    Show,

    /// Store a dataset file to use instead of the bundled set
    SetDataset {
        /// Path to a scenarios JSON file
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Go back to the bundled dataset
    ClearDataset,

    /// Store the listing page size
    SetPageSize {
        /// Scenarios per page (at least 1)
        #[arg(value_name = "SIZE")]
        size: usize,
    },
}
