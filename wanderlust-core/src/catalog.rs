//! Deduplicated attraction catalog.
//!
//! The catalog collapses raw visits into one entry per distinct attraction
//! name. Entry positions are dense and start at zero; they double as row and
//! column indices of every similarity structure built on top of the catalog.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::VisitRecord;

/// One unique attraction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attraction {
    /// Dense position of the entry within its catalog.
    pub index: usize,
    /// Display name; the lookup key for queries.
    pub name: String,
    /// Text fed to the vectoriser.
    pub text: String,
}

/// Ordered set of unique attractions with constant-time name lookup.
///
/// Names are unique by construction: the first occurrence of a name wins and
/// later duplicates are ignored, including their cleaned text.
///
/// # Examples
///
/// ```
/// use wanderlust_core::AttractionCatalog;
///
/// let catalog = AttractionCatalog::from_names(["Louvre", "Colosseum", "Louvre"]);
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.name(1), Some("Colosseum"));
/// assert_eq!(catalog.index_of("Big Ben"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttractionCatalog {
    entries: Vec<Attraction>,
    by_name: HashMap<String, usize>,
}

impl AttractionCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deduplicate visit records in first-seen order.
    ///
    /// Missing attraction names are indexed under the empty string, so every
    /// visit maps to exactly one entry.
    #[must_use]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a VisitRecord>,
    {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record.attraction_name(), record.indexed_text());
        }
        catalog
    }

    /// Deduplicate plain names in first-seen order; each name is its own text.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for name in names {
            let text = name.as_ref();
            catalog.insert(text, text);
        }
        catalog
    }

    fn insert(&mut self, name: &str, text: &str) {
        let index = self.entries.len();
        if let Entry::Vacant(slot) = self.by_name.entry(name.to_owned()) {
            slot.insert(index);
            self.entries.push(Attraction {
                index,
                name: name.to_owned(),
                text: text.to_owned(),
            });
        }
    }

    /// Number of unique attractions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the catalog has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Attraction> {
        self.entries.get(index)
    }

    /// Name of the entry at `index`, if in range.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.get(index).map(|entry| entry.name.as_str())
    }

    /// Resolve an exact name to its index.
    ///
    /// Matching is byte-for-byte: no trimming and no case folding.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Iterate entries in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attraction> {
        self.entries.iter()
    }

    /// Iterate the vectoriser texts in index order.
    pub fn texts(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.text.as_str())
    }

    /// Names sorted ascending, as offered in a destination picker.
    #[must_use]
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.iter().map(|entry| entry.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Borrow the entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Attraction] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a AttractionCatalog {
    type Item = &'a Attraction;
    type IntoIter = std::slice::Iter<'a, Attraction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collapse raw visits into an [`AttractionCatalog`].
///
/// Deterministic: the same input order always yields the same indices. An
/// empty input yields an empty catalog.
#[must_use]
pub fn build_catalog<'a, I>(records: I) -> AttractionCatalog
where
    I: IntoIterator<Item = &'a VisitRecord>,
{
    AttractionCatalog::from_records(records)
}
