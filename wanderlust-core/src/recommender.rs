//! Query seam for destination recommenders.
//!
//! The [`Recommender`] trait is what front-ends depend on: they hand over an
//! attraction name picked from the catalog and render the ordered list that
//! comes back. Implementations are built once and then only read.

use thiserror::Error;

use crate::AttractionCatalog;

/// Number of matches the destination finder asks for.
pub const DEFAULT_MATCH_COUNT: usize = 4;

/// Errors returned when querying a [`Recommender`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// The queried name has no exact match in the catalog.
    #[error("attraction {name:?} is not in the catalog")]
    NotFound {
        /// Name as supplied by the caller.
        name: String,
    },
}

impl RecommendError {
    /// Build a [`RecommendError::NotFound`] for `name`.
    #[must_use]
    pub fn not_found(name: &str) -> Self {
        Self::NotFound {
            name: name.to_owned(),
        }
    }
}

/// Owned result of a recommendation query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Attraction the matches were computed for.
    pub attraction: String,
    /// Matching attraction names, most similar first.
    pub matches: Vec<String>,
}

/// Rank catalog entries by similarity to a chosen attraction.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single built
/// instance can serve concurrent queries without locking. Queries never
/// mutate state.
///
/// Implementations must:
/// - Resolve `name` by exact string match against [`Recommender::catalog`].
/// - Never return the queried attraction itself.
/// - Return at most `k` names, fewer only when the catalog is too small.
///
/// # Examples
///
/// ```
/// use wanderlust_core::{AttractionCatalog, RecommendError, Recommender};
///
/// struct CatalogOrder(AttractionCatalog);
///
/// impl Recommender for CatalogOrder {
///     fn catalog(&self) -> &AttractionCatalog {
///         &self.0
///     }
///
///     fn find_similar(&self, name: &str, k: usize) -> Result<Vec<&str>, RecommendError> {
///         let query = self.0.index_of(name).ok_or_else(|| RecommendError::not_found(name))?;
///         Ok(self
///             .0
///             .iter()
///             .filter(|entry| entry.index != query)
///             .take(k)
///             .map(|entry| entry.name.as_str())
///             .collect())
///     }
/// }
///
/// let recommender = CatalogOrder(AttractionCatalog::from_names(["A", "B", "C"]));
/// assert_eq!(recommender.find_similar("B", 4).ok(), Some(vec!["A", "C"]));
/// ```
pub trait Recommender: Send + Sync {
    /// Catalog the recommender answers queries against.
    fn catalog(&self) -> &AttractionCatalog;

    /// Return up to `k` attraction names most similar to `name`.
    ///
    /// # Errors
    /// Returns [`RecommendError::NotFound`] when `name` is not an exact
    /// catalog entry.
    fn find_similar(&self, name: &str, k: usize) -> Result<Vec<&str>, RecommendError>;

    /// Owned variant of [`Recommender::find_similar`].
    ///
    /// # Errors
    /// Propagates [`RecommendError::NotFound`] from
    /// [`Recommender::find_similar`].
    fn recommend(&self, name: &str, k: usize) -> Result<Recommendation, RecommendError> {
        let matches = self
            .find_similar(name, k)?
            .into_iter()
            .map(str::to_owned)
            .collect();
        Ok(Recommendation {
            attraction: name.to_owned(),
            matches,
        })
    }
}
