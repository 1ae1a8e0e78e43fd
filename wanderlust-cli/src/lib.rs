//! Command-line interface for the Wanderlust destination recommender.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;
use wanderlust_core::VisitRecord;

mod destinations;
mod error;
mod recommend;
mod summary;

pub use error::CliError;

use destinations::{DestinationsArgs, run_destinations};
use recommend::{RecommendArgs, run_recommend};
use summary::{SummaryArgs, run_summary};

pub(crate) const ARG_ATTRACTION: &str = "attraction";
pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_COUNT: &str = "count";
pub(crate) const ARG_TOP: &str = "top";
pub(crate) const ENV_RECOMMEND_ATTRACTION: &str = "WANDERLUST_CMDS_RECOMMEND_ATTRACTION";
pub(crate) const ENV_RECOMMEND_DATASET: &str = "WANDERLUST_CMDS_RECOMMEND_DATASET";
pub(crate) const ENV_DESTINATIONS_DATASET: &str = "WANDERLUST_CMDS_DESTINATIONS_DATASET";
pub(crate) const ENV_SUMMARY_DATASET: &str = "WANDERLUST_CMDS_SUMMARY_DATASET";

/// Run the Wanderlust CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when parsing, configuration, dataset loading or the
/// selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Destinations(args) => run_destinations(args),
        Command::Summary(args) => run_summary(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wanderlust",
    about = "Find destinations similar to the ones travellers already love",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend destinations similar to an attraction.
    Recommend(RecommendArgs),
    /// List every destination in the dataset.
    Destinations(DestinationsArgs),
    /// Summarise the visit dataset.
    Summary(SummaryArgs),
}

/// Check that a configured input path names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match wanderlust_data::fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the visit dataset at `path`.
pub(crate) fn load_dataset(path: &Utf8Path) -> Result<Vec<VisitRecord>, CliError> {
    let visits = wanderlust_data::load_visits(path)?;
    log::info!("loaded {} visits from {path}", visits.len());
    Ok(visits)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
