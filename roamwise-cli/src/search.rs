//! Search command implementation for the Roamwise CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roamwise_core::{
    BudgetScope, BudgetType, Criteria, InMemoryCatalog, PriceLevel, SearchMode, SearchResponse,
    SearchSession, Searcher,
};
use roamwise_search::CatalogSearcher;
use serde::{Deserialize, Serialize};

use crate::{
    ARG_BROWSE, ARG_BUDGET_SCOPE, ARG_CATALOG, ARG_DAYS, ARG_EXPERIENCE, ARG_KEYWORDS,
    ARG_MAX_BUDGET, ARG_MIN_BUDGET, ARG_MODE, ARG_OUTPUT, ARG_PEOPLE, ARG_PRICE, ARG_QUERY,
    CliError, ENV_CATALOG, fs,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the destinations or trips in a JSON catalogue against \
                 the given preferences. Every option can also come from a \
                 configuration file or ROAMWISE_* environment variables. \
                 Numeric preferences that cannot be read are ignored.",
    about = "Search a catalogue of destinations and trips"
)]
#[ortho_config(prefix = "ROAMWISE")]
pub(crate) struct SearchArgs {
    /// Path to a JSON catalogue with `destinations` and `trips` lists.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// What to search: location, experience or trip.
    #[arg(long = ARG_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<String>,
    /// Place name to search for; empty lists popular destinations.
    #[arg(long = ARG_QUERY, value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Experience to look for, e.g. "Beach & Coast". Repeatable.
    #[arg(long = ARG_EXPERIENCE, value_name = "tag")]
    #[serde(default)]
    pub(crate) experience: Vec<String>,
    /// Acceptable price tier from 1 to 5. Repeatable.
    #[arg(long = ARG_PRICE, value_name = "tier")]
    #[serde(default)]
    pub(crate) price: Vec<u8>,
    /// Number of travellers.
    #[arg(long = ARG_PEOPLE, value_name = "count")]
    #[serde(default)]
    pub(crate) people: Option<String>,
    /// Desired trip length in days.
    #[arg(long = ARG_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) days: Option<String>,
    /// Lower budget bound.
    #[arg(long = ARG_MIN_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) min_budget: Option<String>,
    /// Upper budget bound.
    #[arg(long = ARG_MAX_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) max_budget: Option<String>,
    /// Whether budget bounds are per-person or total.
    #[arg(long = ARG_BUDGET_SCOPE, value_name = "scope")]
    #[serde(default)]
    pub(crate) budget_scope: Option<String>,
    /// Free-text keywords, separated by spaces or commas.
    #[arg(long = ARG_KEYWORDS, value_name = "text")]
    #[serde(default)]
    pub(crate) keywords: Option<String>,
    /// Stage the preferences without applying them and list the catalogue
    /// unranked.
    #[arg(long = ARG_BROWSE)]
    #[serde(default)]
    pub(crate) browse: bool,
    /// Write results to this file instead of standard output.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchConfig {
    /// Path to the JSON catalogue.
    pub(crate) catalog: Utf8PathBuf,
    /// What to search for.
    pub(crate) mode: SearchMode,
    /// Location query.
    pub(crate) query: String,
    /// Preferences to stage, and apply unless browsing.
    pub(crate) criteria: Criteria,
    /// Whether the preferences are applied.
    pub(crate) apply: bool,
    /// Output file; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl SearchConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match fs::is_file(&self.catalog) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_CATALOG,
                path: self.catalog.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_CATALOG,
                    path: self.catalog.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_CATALOG,
                path: self.catalog.clone(),
                source,
            }),
        }
    }

    /// Build the session the command searches with.
    pub(crate) fn session(&self) -> SearchSession {
        let mut session = SearchSession::new(self.mode).with_query(self.query.as_str());
        session.staged_mut().clone_from(&self.criteria);
        if self.apply {
            session.apply_filters();
        }
        session
    }
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let criteria = criteria_from_args(&args)?;
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_CATALOG,
        })?;
        let mode = args
            .mode
            .as_deref()
            .map(str::parse::<SearchMode>)
            .transpose()
            .map_err(|reason| CliError::InvalidChoice {
                field: ARG_MODE,
                reason,
            })?
            .unwrap_or_default();
        Ok(Self {
            catalog,
            mode,
            query: args.query.unwrap_or_default(),
            criteria,
            apply: !args.browse,
            output: args.output,
        })
    }
}

fn criteria_from_args(args: &SearchArgs) -> Result<Criteria, CliError> {
    let has_bounds = [&args.min_budget, &args.max_budget]
        .into_iter()
        .flatten()
        .any(|raw| !raw.trim().is_empty());
    if has_bounds && !args.price.is_empty() {
        return Err(CliError::ConflictingBudget);
    }

    let mut criteria = Criteria::new();
    for tag in &args.experience {
        criteria.experience_filters.insert(tag.as_str().into());
    }
    for &tier in &args.price {
        let level = PriceLevel::new(tier).map_err(CliError::InvalidPrice)?;
        criteria.price_ratings.insert(level);
    }
    if let Some(raw) = &args.people {
        criteria.set_number_of_people_text(raw);
    }
    if let Some(raw) = &args.days {
        criteria.set_trip_days_text(raw);
    }
    if has_bounds {
        criteria.set_budget_type(BudgetType::Actual);
        criteria.set_min_budget_text(args.min_budget.as_deref().unwrap_or_default());
        criteria.set_max_budget_text(args.max_budget.as_deref().unwrap_or_default());
    }
    if let Some(raw) = &args.budget_scope {
        criteria.budget_scope = raw
            .parse::<BudgetScope>()
            .map_err(|reason| CliError::InvalidChoice {
                field: ARG_BUDGET_SCOPE,
                reason,
            })?;
    }
    if let Some(raw) = &args.keywords {
        criteria.set_keywords(raw.as_str());
    }
    Ok(criteria)
}

pub(super) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_search_with(args, &mut stdout)
}

/// Run a search, writing results to `--output` when set and to `writer`
/// otherwise.
pub(super) fn run_search_with(args: SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_search_config(args)?;
    let response = execute_search(&config)?;
    match &config.output {
        Some(path) => {
            let mut file = fs::create_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            write_search_response(&mut file, &response)?;
            info!("wrote {} results to {path}", response.len());
            Ok(())
        }
        None => write_search_response(writer, &response),
    }
}

fn resolve_search_config(args: SearchArgs) -> Result<SearchConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_search(config: &SearchConfig) -> Result<SearchResponse, CliError> {
    let catalog = load_catalog(&config.catalog)?;
    let session = config.session();
    debug!(
        "searching {} catalogue in {:?} state",
        session.mode(),
        session.state()
    );
    Ok(CatalogSearcher::new(catalog).search(&session.request()))
}

/// Loads a JSON-encoded [`InMemoryCatalog`] from disk.
pub(super) fn load_catalog(path: &Utf8Path) -> Result<InMemoryCatalog, CliError> {
    let file = fs::open_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })
}

fn write_search_response(
    writer: &mut dyn Write,
    response: &SearchResponse,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerialiseResults)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SearchConfig, CliError> {
    let merged = SearchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SearchConfig::try_from(merged)
}
