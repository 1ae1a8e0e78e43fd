//! Content-based similarity for Wanderlust attractions.
//!
//! Each catalog entry's text is tokenised, stripped of English stop words
//! and weighted with smooth-IDF TF-IDF. Rows are scaled to unit length, so
//! multiplying the term matrix by its transpose gives pairwise cosine
//! similarities. The whole matrix is computed once in [`build_index`];
//! [`find_similar`] then only reads one row and sorts it.
//!
//! # Examples
//!
//! ```
//! use wanderlust_core::{AttractionCatalog, Recommender};
//! use wanderlust_similarity::build_index;
//!
//! let catalog = AttractionCatalog::from_names([
//!     "Eiffel Tower, Paris",
//!     "Colosseum, Rome",
//!     "Louvre Museum, Paris",
//! ]);
//! let index = build_index(catalog);
//!
//! let recommendation = index.recommend("Eiffel Tower, Paris", 4)?;
//! assert_eq!(recommendation.matches, ["Louvre Museum, Paris", "Colosseum, Rome"]);
//! # Ok::<(), wanderlust_core::RecommendError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod index;
mod matrix;
pub mod stop_words;
mod tokenizer;
mod vectorizer;

pub use index::{IndexDiagnostics, IndexWarning, SimilarityIndex, build_index, find_similar};
pub use matrix::{SimilarityMatrix, SparseRow, TermVectorMatrix};
pub use tokenizer::tokenize;
pub use vectorizer::{TfIdfVectorizer, VectorizerOptions};
