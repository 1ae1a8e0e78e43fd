//! Recommend command implementation for the Wanderlust CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::{info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wanderlust_core::{AttractionCatalog, DEFAULT_MATCH_COUNT, Recommendation, Recommender, build_catalog};
use wanderlust_similarity::SimilarityIndex;

use crate::{
    ARG_ATTRACTION, ARG_COUNT, ARG_DATASET, CliError, ENV_RECOMMEND_ATTRACTION,
    ENV_RECOMMEND_DATASET, load_dataset, require_existing, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Build the similarity index from a visit dataset and print \
                 the destinations whose names are most similar to the chosen \
                 attraction. The attraction must match a dataset entry \
                 exactly.",
    about = "Recommend destinations similar to an attraction"
)]
#[ortho_config(prefix = "WANDERLUST")]
pub(crate) struct RecommendArgs {
    /// Attraction name, exactly as listed by `wanderlust destinations`.
    #[arg(value_name = "attraction")]
    #[serde(default)]
    pub(crate) attraction: Option<String>,
    /// Path to the visit dataset (`.json`, `.jsonl` or `.ndjson`).
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Number of destinations to recommend.
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Attraction to find matches for.
    pub(crate) attraction: String,
    /// Visit dataset path.
    pub(crate) dataset: Utf8PathBuf,
    /// Number of matches to return.
    pub(crate) count: usize,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dataset, ARG_DATASET)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let attraction = args.attraction.ok_or(CliError::MissingArgument {
            field: ARG_ATTRACTION,
            env: ENV_RECOMMEND_ATTRACTION,
        })?;
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_RECOMMEND_DATASET,
        })?;
        Ok(Self {
            attraction,
            dataset,
            count: args.count.unwrap_or(DEFAULT_MATCH_COUNT),
        })
    }
}

/// Builds the recommender queried by the current invocation.
pub(crate) trait RecommenderBuilder {
    fn build(&self, catalog: AttractionCatalog) -> Result<Box<dyn Recommender>, CliError>;
}

/// Builds a TF-IDF [`SimilarityIndex`] and logs its diagnostics.
pub(crate) struct DefaultRecommenderBuilder;

impl RecommenderBuilder for DefaultRecommenderBuilder {
    fn build(&self, catalog: AttractionCatalog) -> Result<Box<dyn Recommender>, CliError> {
        let index = SimilarityIndex::build(catalog);
        let diagnostics = index.diagnostics();
        info!(
            "indexed {} attractions over {} terms ({} without terms)",
            diagnostics.catalog_size, diagnostics.vocabulary_size, diagnostics.empty_rows
        );
        for warning in &diagnostics.warnings {
            warn!("{warning}");
        }
        Ok(Box::new(index))
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &DefaultRecommenderBuilder, &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn RecommenderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendation = execute_recommend(args, builder)?;
    write_json(writer, &recommendation)
}

fn execute_recommend(
    args: RecommendArgs,
    builder: &dyn RecommenderBuilder,
) -> Result<Recommendation, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let visits = load_dataset(&config.dataset)?;
    let recommender = builder.build(build_catalog(&visits))?;
    Ok(recommender.recommend(&config.attraction, config.count)?)
}
