//! Smooth-IDF, L2-normalised TF-IDF vectoriser.

use std::collections::BTreeMap;

use crate::matrix::{SparseRow, TermVectorMatrix};
use crate::tokenizer::tokenize;

/// Tokenisation settings for the vectoriser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorizerOptions {
    /// Shortest word, in characters, kept as a term.
    pub min_token_len: usize,
    /// Lowercase text before splitting it into words.
    pub lowercase: bool,
    /// Drop words on the built-in English stop-word list.
    pub remove_stop_words: bool,
}

impl Default for VectorizerOptions {
    fn default() -> Self {
        Self {
            min_token_len: 2,
            lowercase: true,
            remove_stop_words: true,
        }
    }
}

/// Turns a corpus of short texts into a [`TermVectorMatrix`].
///
/// Weights follow the smooth-IDF scheme
/// `tf(t, d) * (ln((1 + n) / (1 + df(t))) + 1)` with raw term counts as `tf`;
/// each row is then scaled to unit Euclidean length. Documents without any
/// surviving term keep an all-zero row.
///
/// # Examples
///
/// ```
/// use wanderlust_similarity::TfIdfVectorizer;
///
/// let matrix = TfIdfVectorizer::default().fit_transform(["Louvre, Paris", "Colosseum, Rome"]);
/// assert_eq!(matrix.vocabulary(), ["colosseum", "louvre", "paris", "rome"]);
/// assert_eq!(matrix.n_rows(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    options: VectorizerOptions,
}

impl TfIdfVectorizer {
    /// Create a vectoriser with the given tokenisation settings.
    #[must_use]
    pub const fn new(options: VectorizerOptions) -> Self {
        Self { options }
    }

    /// Tokenisation settings in use.
    #[must_use]
    pub const fn options(&self) -> &VectorizerOptions {
        &self.options
    }

    /// Learn the vocabulary of `texts` and weight every document against it.
    ///
    /// Vocabulary columns are ordered by term, so the result depends only on
    /// the texts and their order.
    #[must_use]
    pub fn fit_transform<I, S>(&self, texts: I) -> TermVectorMatrix
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let counts: Vec<BTreeMap<String, usize>> = texts
            .into_iter()
            .map(|text| term_counts(tokenize(text.as_ref(), &self.options)))
            .collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for terms in &counts {
            for term in terms.keys() {
                *document_frequency.entry(term.as_str()).or_default() += 1;
            }
        }

        let columns: BTreeMap<&str, usize> = document_frequency
            .keys()
            .enumerate()
            .map(|(column, term)| (*term, column))
            .collect();
        let idf: Vec<f64> = document_frequency
            .values()
            .map(|&df| smooth_idf(counts.len(), df))
            .collect();

        let rows = counts
            .iter()
            .map(|terms| {
                let entries = terms.iter().filter_map(|(term, &tf)| {
                    let column = columns.get(term.as_str()).copied()?;
                    let weight = idf.get(column).copied()?;
                    Some((column, scale(weight, tf)))
                });
                SparseRow::from_entries(entries).normalised()
            })
            .collect();
        let vocabulary = document_frequency.keys().map(|term| (*term).to_owned()).collect();

        TermVectorMatrix::new(rows, vocabulary, idf)
    }
}

fn term_counts(tokens: Vec<String>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token).or_default() += 1;
    }
    counts
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "inverse document frequency is a float ratio of document counts"
)]
fn smooth_idf(documents: usize, df: usize) -> f64 {
    ((1.0 + documents as f64) / (1.0 + df as f64)).ln() + 1.0
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "term weights scale raw counts by the inverse document frequency"
)]
fn scale(idf: f64, tf: usize) -> f64 {
    tf as f64 * idf
}
