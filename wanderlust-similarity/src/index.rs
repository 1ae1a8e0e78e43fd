//! Built similarity index and the ranking query.

use thiserror::Error;
use wanderlust_core::{AttractionCatalog, RecommendError, Recommender};

use crate::matrix::{SimilarityMatrix, TermVectorMatrix};
use crate::vectorizer::{TfIdfVectorizer, VectorizerOptions};

/// Non-fatal conditions noticed while building an index.
///
/// The index is still usable; queries simply have nothing meaningful to rank.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IndexWarning {
    /// The catalog has no entries, so every query is `NotFound`.
    #[error("catalog has no attractions; every query will fail to match")]
    EmptyCatalog,
    /// No attraction text produced a term; all similarities are zero.
    #[error("no attraction name contains an indexable term; all similarities are zero")]
    EmptyVocabulary,
}

/// Facts about a build, for callers that want to report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexDiagnostics {
    /// Number of catalog entries indexed.
    pub catalog_size: usize,
    /// Number of distinct terms after stop-word removal.
    pub vocabulary_size: usize,
    /// Entries whose text produced no term.
    pub empty_rows: usize,
    /// Degenerate-input warnings.
    pub warnings: Vec<IndexWarning>,
}

impl IndexDiagnostics {
    fn inspect(terms: &TermVectorMatrix) -> Self {
        let mut warnings = Vec::new();
        if terms.n_rows() == 0 {
            warnings.push(IndexWarning::EmptyCatalog);
        } else if terms.is_degenerate() {
            warnings.push(IndexWarning::EmptyVocabulary);
        }
        Self {
            catalog_size: terms.n_rows(),
            vocabulary_size: terms.n_terms(),
            empty_rows: terms.empty_rows(),
            warnings,
        }
    }
}

/// Immutable catalog, term matrix and similarity matrix built together.
///
/// Build once at start-up and share by reference or `Arc`; queries never
/// mutate the index.
///
/// # Examples
///
/// ```
/// use wanderlust_core::AttractionCatalog;
/// use wanderlust_similarity::SimilarityIndex;
///
/// let catalog = AttractionCatalog::from_names(["Louvre, Paris", "Colosseum, Rome", "Eiffel Tower, Paris"]);
/// let index = SimilarityIndex::build(catalog);
/// assert_eq!(index.find_similar("Louvre, Paris", 1).ok(), Some(vec!["Eiffel Tower, Paris"]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityIndex {
    catalog: AttractionCatalog,
    terms: TermVectorMatrix,
    similarities: SimilarityMatrix,
    diagnostics: IndexDiagnostics,
}

impl SimilarityIndex {
    /// Build with the default English tokenisation.
    #[must_use]
    pub fn build(catalog: AttractionCatalog) -> Self {
        Self::build_with(catalog, &VectorizerOptions::default())
    }

    /// Build with custom tokenisation settings.
    #[must_use]
    pub fn build_with(catalog: AttractionCatalog, options: &VectorizerOptions) -> Self {
        let terms = TfIdfVectorizer::new(options.clone()).fit_transform(catalog.texts());
        let similarities = SimilarityMatrix::from_terms(&terms);
        let diagnostics = IndexDiagnostics::inspect(&terms);
        Self {
            catalog,
            terms,
            similarities,
            diagnostics,
        }
    }

    /// Indexed catalog.
    #[must_use]
    pub const fn catalog(&self) -> &AttractionCatalog {
        &self.catalog
    }

    /// TF-IDF weights, one row per catalog entry.
    #[must_use]
    pub const fn terms(&self) -> &TermVectorMatrix {
        &self.terms
    }

    /// Pairwise cosine similarities.
    #[must_use]
    pub const fn similarities(&self) -> &SimilarityMatrix {
        &self.similarities
    }

    /// Build diagnostics.
    #[must_use]
    pub const fn diagnostics(&self) -> &IndexDiagnostics {
        &self.diagnostics
    }

    /// Up to `k` names most similar to `name`; see [`find_similar`].
    ///
    /// # Errors
    /// Returns [`RecommendError::NotFound`] when `name` is not in the catalog.
    pub fn find_similar(&self, name: &str, k: usize) -> Result<Vec<&str>, RecommendError> {
        find_similar(&self.catalog, &self.similarities, name, k)
    }
}

impl Recommender for SimilarityIndex {
    fn catalog(&self) -> &AttractionCatalog {
        &self.catalog
    }

    fn find_similar(&self, name: &str, k: usize) -> Result<Vec<&str>, RecommendError> {
        Self::find_similar(self, name, k)
    }
}

/// Vectorise `catalog` and precompute every pairwise similarity.
///
/// Never fails: an empty catalog or an empty vocabulary yields a degenerate
/// index whose [`IndexDiagnostics::warnings`] say so.
#[must_use]
pub fn build_index(catalog: AttractionCatalog) -> SimilarityIndex {
    SimilarityIndex::build(catalog)
}

/// Rank the catalog against the exact entry `name`.
///
/// Entries are ordered by descending similarity, ties by ascending index. The
/// queried entry is excluded by index, so only it can be dropped even when
/// other entries score identically. At most `k` names are returned; fewer
/// only when the catalog has fewer than `k + 1` entries. Cells missing from
/// `similarities` count as zero.
///
/// # Errors
/// Returns [`RecommendError::NotFound`] when `name` does not match a catalog
/// entry byte for byte. An empty catalog matches nothing.
pub fn find_similar<'a>(
    catalog: &'a AttractionCatalog,
    similarities: &SimilarityMatrix,
    name: &str,
    k: usize,
) -> Result<Vec<&'a str>, RecommendError> {
    let query = catalog
        .index_of(name)
        .ok_or_else(|| RecommendError::not_found(name))?;

    let mut ranked: Vec<(usize, f64)> = catalog
        .iter()
        .filter(|entry| entry.index != query)
        .map(|entry| {
            let score = similarities.get(query, entry.index).unwrap_or_default();
            (entry.index, score)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(ranked
        .into_iter()
        .take(k)
        .filter_map(|(index, _)| catalog.name(index))
        .collect())
}
