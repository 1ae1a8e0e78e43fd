//! Destinations command: the picker list of every catalog name.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wanderlust_core::build_catalog;

use crate::{ARG_DATASET, CliError, ENV_DESTINATIONS_DATASET, load_dataset, require_existing};

/// CLI arguments for the `destinations` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "destinations",
    about = "List every destination in the dataset, sorted by name"
)]
#[ortho_config(prefix = "WANDERLUST")]
pub(crate) struct DestinationsArgs {
    /// Path to the visit dataset (`.json`, `.jsonl` or `.ndjson`).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
}

impl DestinationsArgs {
    pub(crate) fn into_dataset(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        merged.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_DESTINATIONS_DATASET,
        })
    }
}

pub(crate) fn run_destinations(args: DestinationsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_destinations_with(args, &mut stdout)
}

pub(crate) fn run_destinations_with(
    args: DestinationsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let dataset = args.into_dataset()?;
    require_existing(&dataset, ARG_DATASET)?;
    let visits = load_dataset(&dataset)?;
    let catalog = build_catalog(&visits);
    for name in catalog.sorted_names() {
        writeln!(writer, "{name}").map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
