//! Core domain types for the Wanderlust destination recommender.
//!
//! The crate owns the traveller visit model, the deduplicated
//! [`AttractionCatalog`] that every similarity structure is indexed against,
//! and the [`Recommender`] seam that query front-ends depend on. Nothing in
//! here performs I/O or logging; failures surface as typed errors.
//!
//! # Examples
//!
//! ```
//! use wanderlust_core::{VisitRecord, build_catalog};
//!
//! let visits = [
//!     VisitRecord::named("Eiffel Tower"),
//!     VisitRecord::named("Louvre"),
//!     VisitRecord::named("Eiffel Tower"),
//! ];
//! let catalog = build_catalog(&visits);
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.index_of("Louvre"), Some(1));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod insights;
pub mod recommender;
pub mod visit;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{Attraction, AttractionCatalog, build_catalog};
pub use insights::{
    CountryVisits, ModeCount, MonthlyRating, VisitInsights, average_rating,
    monthly_average_rating, summarise_visits, top_countries, unique_destinations,
    visit_mode_counts,
};
pub use recommender::{DEFAULT_MATCH_COUNT, Recommendation, RecommendError, Recommender};
pub use visit::VisitRecord;
