//! Test-only fixtures: a small sample catalog and a canned `Recommender`.

use std::collections::HashMap;

use crate::{AttractionCatalog, RecommendError, Recommender, VisitRecord};

/// Five landmarks across three cities; two share "Paris" and two "New York".
pub const SAMPLE_DESTINATIONS: [&str; 5] = [
    "Eiffel Tower, Paris",
    "Louvre Museum, Paris",
    "Statue of Liberty, New York",
    "Central Park, New York",
    "Colosseum, Rome",
];

/// Catalog built from [`SAMPLE_DESTINATIONS`].
#[must_use]
pub fn sample_catalog() -> AttractionCatalog {
    AttractionCatalog::from_names(SAMPLE_DESTINATIONS)
}

/// One visit per sample destination, with the first visited twice.
#[must_use]
pub fn sample_visits() -> Vec<VisitRecord> {
    SAMPLE_DESTINATIONS
        .iter()
        .chain(SAMPLE_DESTINATIONS.first())
        .map(|name| VisitRecord::named(*name))
        .collect()
}

/// `Recommender` returning pre-recorded matches.
///
/// Queries for names without recorded matches but present in the catalog
/// yield an empty list; unknown names yield `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct FixedRecommender {
    catalog: AttractionCatalog,
    matches: HashMap<String, Vec<String>>,
}

impl FixedRecommender {
    /// Create a recommender over `catalog` with no recorded matches.
    #[must_use]
    pub fn new(catalog: AttractionCatalog) -> Self {
        Self {
            catalog,
            matches: HashMap::new(),
        }
    }

    /// Record the matches returned for `name`.
    #[must_use]
    pub fn with_matches<I, S>(mut self, name: &str, matches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matches
            .insert(name.to_owned(), matches.into_iter().map(Into::into).collect());
        self
    }
}

impl Recommender for FixedRecommender {
    fn catalog(&self) -> &AttractionCatalog {
        &self.catalog
    }

    fn find_similar(&self, name: &str, k: usize) -> Result<Vec<&str>, RecommendError> {
        if self.catalog.index_of(name).is_none() {
            return Err(RecommendError::not_found(name));
        }
        Ok(self
            .matches
            .get(name)
            .map(|matches| matches.iter().take(k).map(String::as_str).collect())
            .unwrap_or_default())
    }
}
