//! Command-line interface for searching a Roamwise catalogue.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod search;

pub use error::CliError;

use search::{SearchArgs, run_search};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_MODE: &str = "mode";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ARG_EXPERIENCE: &str = "experience";
pub(crate) const ARG_PRICE: &str = "price";
pub(crate) const ARG_PEOPLE: &str = "people";
pub(crate) const ARG_DAYS: &str = "days";
pub(crate) const ARG_MIN_BUDGET: &str = "min-budget";
pub(crate) const ARG_MAX_BUDGET: &str = "max-budget";
pub(crate) const ARG_BUDGET_SCOPE: &str = "budget-scope";
pub(crate) const ARG_KEYWORDS: &str = "keywords";
pub(crate) const ARG_BROWSE: &str = "browse";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_CATALOG: &str = "ROAMWISE_CMDS_SEARCH_CATALOG";

/// Run the Roamwise CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Search(args) => run_search(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "roamwise",
    about = "Rank travel destinations and trips against your preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search a catalogue of destinations and trips.
    Search(SearchArgs),
}

#[cfg(test)]
mod tests;
