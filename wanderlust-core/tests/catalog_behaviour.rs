//! Behavioural coverage for collapsing visits into a catalog.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use wanderlust_core::{AttractionCatalog, VisitRecord, build_catalog};

/// Visits fed to the deduplicator and the catalog it produced.
#[derive(Debug, Default)]
pub struct CatalogWorld {
    visits: RefCell<Vec<VisitRecord>>,
    catalog: RefCell<Option<AttractionCatalog>>,
}

/// Fresh world for each scenario.
#[fixture]
pub fn world() -> CatalogWorld {
    CatalogWorld::default()
}

impl CatalogWorld {
    fn entries(&self) -> Vec<(usize, String)> {
        let borrowed = self.catalog.borrow();
        let Some(catalog) = borrowed.as_ref() else {
            panic!("catalog must be built before assertions")
        };
        catalog
            .iter()
            .map(|entry| (entry.index, entry.name.clone()))
            .collect()
    }
}

#[given("visits to \"Eiffel Tower\", \"Louvre\" and \"Eiffel Tower\" again")]
fn duplicate_visits(#[from(world)] world: &CatalogWorld) {
    world.visits.replace(vec![
        VisitRecord::named("Eiffel Tower"),
        VisitRecord::named("Louvre"),
        VisitRecord::named("Eiffel Tower"),
    ]);
}

#[given("two visits without an attraction name and one to \"Louvre\"")]
fn unnamed_visits(#[from(world)] world: &CatalogWorld) {
    world.visits.replace(vec![
        VisitRecord::default(),
        VisitRecord::named("Louvre"),
        VisitRecord::default(),
    ]);
}

#[given("no visits")]
fn no_visits(#[from(world)] world: &CatalogWorld) {
    world.visits.replace(Vec::new());
}

#[when("I build the catalog")]
fn build(#[from(world)] world: &CatalogWorld) {
    let catalog = build_catalog(world.visits.borrow().iter());
    world.catalog.replace(Some(catalog));
}

#[then("the catalog lists Eiffel Tower at 0 and Louvre at 1")]
fn lists_first_seen_order(#[from(world)] world: &CatalogWorld) {
    assert_eq!(
        world.entries(),
        vec![(0, "Eiffel Tower".to_owned()), (1, "Louvre".to_owned())]
    );
}

#[then("the catalog holds the empty name and Louvre")]
fn holds_empty_name(#[from(world)] world: &CatalogWorld) {
    assert_eq!(
        world.entries(),
        vec![(0, String::new()), (1, "Louvre".to_owned())]
    );
}

#[then("the catalog is empty")]
fn is_empty(#[from(world)] world: &CatalogWorld) {
    assert!(world.entries().is_empty());
}

#[scenario(
    path = "tests/features/catalog.feature",
    name = "duplicate visits collapse in first-seen order"
)]
fn duplicates_collapse(#[from(world)] world: CatalogWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalog.feature",
    name = "visits without a name share one empty entry"
)]
fn unnamed_visits_collapse(#[from(world)] world: CatalogWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/catalog.feature",
    name = "an empty dataset yields an empty catalog"
)]
fn empty_dataset(#[from(world)] world: CatalogWorld) {
    let _ = world;
}
