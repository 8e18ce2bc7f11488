//! Error types emitted by the Roamwise CLI.
//!
//! Keep this error type reasonably small: every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use roamwise_core::PriceLevelError;
use thiserror::Error;

/// Errors emitted by the Roamwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// An option value was not one of its accepted choices.
    #[error("invalid --{field}: {reason}")]
    InvalidChoice {
        field: &'static str,
        reason: String,
    },
    /// A price tier was outside `1..=5`.
    #[error("invalid --price: {0}")]
    InvalidPrice(#[source] PriceLevelError),
    /// Price tiers and explicit budget bounds were both supplied.
    #[error("--price cannot be combined with --min-budget or --max-budget")]
    ConflictingBudget,
    /// Opening the catalogue file failed.
    #[error("failed to open catalogue at {path:?}: {source}")]
    OpenCatalog {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Catalogue JSON could not be decoded.
    #[error("failed to parse catalogue JSON at {path:?}: {source}")]
    ParseCatalog {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Serialising the search results failed.
    #[error("failed to serialise search results: {0}")]
    SerialiseResults(#[source] serde_json::Error),
    /// Creating the output file or its directory failed.
    #[error("failed to create output {path:?}: {source}")]
    CreateOutput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the search results failed.
    #[error("failed to write search results: {0}")]
    WriteOutput(#[source] std::io::Error),
}
