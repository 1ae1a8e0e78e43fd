//! Facade crate for the Wanderlust destination recommender.
//!
//! This crate re-exports the core catalog types and exposes the similarity
//! index and dataset loader behind feature flags.

#![forbid(unsafe_code)]

pub use wanderlust_core::{
    Attraction, AttractionCatalog, Recommendation, RecommendError, Recommender, VisitInsights,
    VisitRecord, build_catalog, summarise_visits,
};

#[cfg(feature = "similarity")]
pub use wanderlust_similarity::{
    IndexDiagnostics, IndexWarning, SimilarityIndex, SimilarityMatrix, TermVectorMatrix,
    VectorizerOptions, build_index, find_similar,
};

#[cfg(feature = "data")]
pub use wanderlust_data::{DatasetError, DatasetFormat, load_visits};
