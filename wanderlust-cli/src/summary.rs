//! Summary command: headline statistics for a visit dataset.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wanderlust_core::summarise_visits;

use crate::{
    ARG_DATASET, ARG_TOP, CliError, ENV_SUMMARY_DATASET, load_dataset, require_existing,
    write_json,
};

/// Countries listed when `--top` is not set.
pub(crate) const DEFAULT_TOP_COUNTRIES: usize = 10;

/// CLI arguments for the `summary` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "summary",
    long_about = "Print destination and traveller counts, the average rating, \
                 the busiest origin countries, visit modes and the average \
                 rating per month as JSON.",
    about = "Summarise the visit dataset"
)]
#[ortho_config(prefix = "WANDERLUST")]
pub(crate) struct SummaryArgs {
    /// Path to the visit dataset (`.json`, `.jsonl` or `.ndjson`).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Number of origin countries to list.
    #[arg(long = ARG_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
}

/// Resolved `summary` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SummaryConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) top: usize,
}

impl SummaryArgs {
    pub(crate) fn into_config(self) -> Result<SummaryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SummaryConfig::try_from(merged)
    }
}

impl TryFrom<SummaryArgs> for SummaryConfig {
    type Error = CliError;

    fn try_from(args: SummaryArgs) -> Result<Self, Self::Error> {
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_SUMMARY_DATASET,
        })?;
        Ok(Self {
            dataset,
            top: args.top.unwrap_or(DEFAULT_TOP_COUNTRIES),
        })
    }
}

pub(crate) fn run_summary(args: SummaryArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_summary_with(args, &mut stdout)
}

pub(crate) fn run_summary_with(args: SummaryArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.dataset, ARG_DATASET)?;
    let visits = load_dataset(&config.dataset)?;
    write_json(writer, &summarise_visits(&visits, config.top))
}
