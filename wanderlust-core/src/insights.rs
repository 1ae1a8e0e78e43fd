//! Aggregate statistics over raw visits.
//!
//! These are the dashboard headline figures: destination and traveller
//! counts, satisfaction, where visitors come from, how they travel, and how
//! ratings move through the year. All functions are pure and deterministic.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

use crate::VisitRecord;

/// Visit count for one origin country.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountryVisits {
    /// Country name as recorded.
    pub country: String,
    /// Number of visits from the country.
    pub visits: usize,
}

/// Visit count for one visit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeCount {
    /// Visit mode as recorded.
    pub mode: String,
    /// Number of visits with the mode.
    pub visits: usize,
}

/// Mean rating for one calendar month.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyRating {
    /// Month number, `1..=12`.
    pub month: u8,
    /// Mean of the ratings given in the month.
    pub average_rating: f64,
}

/// Headline statistics for a visit dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitInsights {
    /// Distinct attraction names; visits without a name are not counted.
    pub unique_destinations: usize,
    /// Number of visit records.
    pub travellers_analysed: usize,
    /// Mean of all present ratings.
    pub average_rating: Option<f64>,
    /// Busiest origin countries.
    pub top_countries: Vec<CountryVisits>,
    /// Visits per visit mode.
    pub visit_modes: Vec<ModeCount>,
    /// Mean rating per month with rated visits.
    pub monthly_average_rating: Vec<MonthlyRating>,
}

/// Compute every headline statistic, keeping `top` countries.
///
/// # Examples
///
/// ```
/// use wanderlust_core::{VisitRecord, summarise_visits};
///
/// let visits = [
///     VisitRecord::named("Louvre").with_rating(4.0),
///     VisitRecord::named("Louvre").with_rating(5.0),
/// ];
/// let insights = summarise_visits(&visits, 10);
/// assert_eq!(insights.unique_destinations, 1);
/// assert_eq!(insights.average_rating, Some(4.5));
/// ```
#[must_use]
pub fn summarise_visits(records: &[VisitRecord], top: usize) -> VisitInsights {
    VisitInsights {
        unique_destinations: unique_destinations(records),
        travellers_analysed: records.len(),
        average_rating: average_rating(records),
        top_countries: top_countries(records, top),
        visit_modes: visit_mode_counts(records),
        monthly_average_rating: monthly_average_rating(records),
    }
}

/// Count distinct attraction names, skipping visits with no name.
///
/// Unlike the catalog, which files nameless visits under `""`, a missing name
/// is not a destination here.
#[must_use]
pub fn unique_destinations(records: &[VisitRecord]) -> usize {
    records
        .iter()
        .filter_map(|record| record.attraction.as_deref())
        .collect::<HashSet<_>>()
        .len()
}

/// Mean of the present ratings, `None` when nothing was rated.
#[must_use]
pub fn average_rating(records: &[VisitRecord]) -> Option<f64> {
    mean(records.iter().filter_map(|record| record.rating))
}

/// Origin countries by visit count, busiest first, ties by name.
#[must_use]
pub fn top_countries(records: &[VisitRecord], limit: usize) -> Vec<CountryVisits> {
    let counts = count_by(records.iter().filter_map(|record| record.user_country.as_deref()));
    counts
        .into_iter()
        .take(limit)
        .map(|(country, visits)| CountryVisits {
            country: country.to_owned(),
            visits,
        })
        .collect()
}

/// Visits per mode, most common first, ties by name.
#[must_use]
pub fn visit_mode_counts(records: &[VisitRecord]) -> Vec<ModeCount> {
    count_by(records.iter().filter_map(|record| record.visit_mode.as_deref()))
        .into_iter()
        .map(|(mode, visits)| ModeCount {
            mode: mode.to_owned(),
            visits,
        })
        .collect()
}

/// Mean rating per month, ascending by month.
///
/// Months outside `1..=12` and unrated visits are ignored.
#[must_use]
pub fn monthly_average_rating(records: &[VisitRecord]) -> Vec<MonthlyRating> {
    let mut by_month: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
    for record in records {
        if let (Some(month), Some(rating)) = (record.visit_month, record.rating)
            && (1..=12).contains(&month)
        {
            by_month.entry(month).or_default().push(rating);
        }
    }
    by_month
        .into_iter()
        .filter_map(|(month, ratings)| {
            mean(ratings).map(|average_rating| MonthlyRating {
                month,
                average_rating,
            })
        })
        .collect()
}

fn count_by<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut ordered: Vec<_> = counts.into_iter().collect();
    // Stable sort keeps the BTreeMap's ascending name order among equal counts.
    ordered.sort_by_key(|&(_, count)| Reverse(count));
    ordered
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging ratings divides a float sum by the sample count"
)]
fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}
