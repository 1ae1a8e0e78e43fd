//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::Workspace;
use super::*;
use crate::recommend::{RecommenderBuilder, run_recommend_with};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use wanderlust_core::test_support::FixedRecommender;
use wanderlust_core::{AttractionCatalog, Recommendation, Recommender};

const RECORDED_MATCHES: [&str; 2] = ["Louvre Museum, Paris", "Colosseum, Rome"];

#[derive(Debug)]
struct RecommendWorld {
    workspace: Workspace,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args<const N: usize>(&self, args: [String; N]) {
        self.cli_args.borrow_mut().extend(args);
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }

    fn recommendation(&self) -> Recommendation {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        serde_json::from_slice(&self.stdout.borrow()).expect("output should be JSON recommendation")
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

/// Builder returning canned matches for the Eiffel Tower.
struct StubRecommenderBuilder;

impl RecommenderBuilder for StubRecommenderBuilder {
    fn build(&self, catalog: AttractionCatalog) -> Result<Box<dyn Recommender>, CliError> {
        Ok(Box::new(
            FixedRecommender::new(catalog).with_matches("Eiffel Tower, Paris", RECORDED_MATCHES),
        ))
    }
}

#[given("a visit dataset exists on disk")]
fn dataset_exists(#[from(world)] world: &RecommendWorld) {
    let dataset = world.workspace.write_sample_dataset();
    world.push_args([format!("--{ARG_DATASET}"), dataset.into_string()]);
}

#[given("the dataset flag points at a file that does not exist")]
fn dataset_absent(#[from(world)] world: &RecommendWorld) {
    let dataset = world.workspace.path("absent.jsonl");
    world.push_args([format!("--{ARG_DATASET}"), dataset.into_string()]);
}

#[given("I ask for recommendations for \"Eiffel Tower, Paris\"")]
fn ask_eiffel(#[from(world)] world: &RecommendWorld) {
    world.push_args(["Eiffel Tower, Paris".to_owned()]);
}

#[given("I ask for recommendations for \"Big Ben\"")]
fn ask_big_ben(#[from(world)] world: &RecommendWorld) {
    world.push_args(["Big Ben".to_owned()]);
}

#[given("I limit the recommendations to 1")]
fn limit_to_one(#[from(world)] world: &RecommendWorld) {
    world.push_args([format!("--{ARG_COUNT}"), "1".to_owned()]);
}

#[when("I run the recommend command")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let mut invocation = vec!["wanderlust".to_owned(), "recommend".to_owned()];
    invocation.extend(world.cli_args.borrow().iter().cloned());
    let outcome = Cli::try_parse_from(invocation)
        .map_err(CliError::from)
        .and_then(|cli| match cli.command {
            Command::Recommend(args) => {
                let mut buffer = world.stdout.borrow_mut();
                run_recommend_with(args, &StubRecommenderBuilder, &mut *buffer)
            }
            other => panic!("expected recommend command, found {other:?}"),
        });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints the recorded matches as JSON")]
fn prints_recorded_matches(#[from(world)] world: &RecommendWorld) {
    let recommendation = world.recommendation();
    assert_eq!(recommendation.attraction, "Eiffel Tower, Paris");
    assert_eq!(recommendation.matches, RECORDED_MATCHES);
}

#[then("the command prints exactly 1 match")]
fn prints_one_match(#[from(world)] world: &RecommendWorld) {
    assert_eq!(world.recommendation().matches, ["Louvre Museum, Paris"]);
}

#[then("the command fails because the attraction is unknown")]
fn fails_unknown_attraction(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::UnknownAttraction { name, .. } => assert_eq!(name, "Big Ben"),
        other => panic!("expected UnknownAttraction, found {other:?}"),
    }
}

#[then("the command fails because the dataset path is missing")]
fn fails_missing_dataset_path(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_DATASET);
            assert_eq!(*env, ENV_RECOMMEND_DATASET);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the dataset file is missing")]
fn fails_missing_dataset_file(#[from(world)] world: &RecommendWorld) {
    match &*world.error() {
        CliError::MissingSourceFile { field, .. } => assert_eq!(*field, ARG_DATASET),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_known, "recommending destinations for a known attraction");
register_recommend_scenario!(recommend_limited, "limiting the number of recommendations");
register_recommend_scenario!(recommend_unknown, "rejecting an unknown attraction");
register_recommend_scenario!(recommend_missing_path, "rejecting a missing dataset path");
register_recommend_scenario!(recommend_absent_file, "rejecting a dataset that does not exist");
