//! Traveller visit records as read from the tourism dataset.

/// A single traveller visit.
///
/// Only [`VisitRecord::attraction`] matters to the recommender; the remaining
/// columns feed the dashboard [`insights`](crate::insights). Every field is
/// optional because the upstream dataset carries gaps. Column names accept
/// both snake case and the dataset's original headers.
///
/// # Examples
///
/// ```
/// use wanderlust_core::VisitRecord;
///
/// let visit = VisitRecord::named("Colosseum").with_rating(4.5);
/// assert_eq!(visit.attraction_name(), "Colosseum");
/// assert_eq!(VisitRecord::default().attraction_name(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitRecord {
    /// Display name of the visited attraction.
    #[cfg_attr(feature = "serde", serde(default, alias = "Attraction"))]
    pub attraction: Option<String>,
    /// Pre-cleaned attraction text, preferred for vectorising when present.
    #[cfg_attr(feature = "serde", serde(default, alias = "Cleaned_Attraction_Name"))]
    pub cleaned_attraction_name: Option<String>,
    /// Visitor's country of origin.
    #[cfg_attr(feature = "serde", serde(default, alias = "UserCountry"))]
    pub user_country: Option<String>,
    /// Visitor's continent of origin.
    #[cfg_attr(feature = "serde", serde(default, alias = "UserContinent"))]
    pub user_continent: Option<String>,
    /// Rating given by the visitor, nominally `1.0..=5.0`.
    #[cfg_attr(feature = "serde", serde(default, alias = "Rating"))]
    pub rating: Option<f64>,
    /// Calendar month of the visit, `1..=12`.
    #[cfg_attr(feature = "serde", serde(default, alias = "VisitMonth"))]
    pub visit_month: Option<u8>,
    /// Calendar year of the visit.
    #[cfg_attr(feature = "serde", serde(default, alias = "VisitYear"))]
    pub visit_year: Option<u16>,
    /// How the visitor travelled (business, family, couples, ...).
    #[cfg_attr(feature = "serde", serde(default, alias = "VisitMode"))]
    pub visit_mode: Option<String>,
}

impl VisitRecord {
    /// Create a visit to the named attraction with every other column empty.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            attraction: Some(name.into()),
            ..Self::default()
        }
    }

    /// Attach pre-cleaned attraction text.
    #[must_use]
    pub fn with_cleaned_name(mut self, cleaned: impl Into<String>) -> Self {
        self.cleaned_attraction_name = Some(cleaned.into());
        self
    }

    /// Attach the visitor's country and continent.
    #[must_use]
    pub fn with_origin(mut self, country: impl Into<String>, continent: impl Into<String>) -> Self {
        self.user_country = Some(country.into());
        self.user_continent = Some(continent.into());
        self
    }

    /// Attach a rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach the visit month and year.
    #[must_use]
    pub const fn with_date(mut self, month: u8, year: u16) -> Self {
        self.visit_month = Some(month);
        self.visit_year = Some(year);
        self
    }

    /// Attach the visit mode.
    #[must_use]
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.visit_mode = Some(mode.into());
        self
    }

    /// Attraction name with missing values normalised to the empty string.
    #[must_use]
    pub fn attraction_name(&self) -> &str {
        self.attraction.as_deref().unwrap_or_default()
    }

    /// Text to vectorise: the cleaned name when present, otherwise the name.
    #[must_use]
    pub fn indexed_text(&self) -> &str {
        self.cleaned_attraction_name
            .as_deref()
            .unwrap_or_else(|| self.attraction_name())
    }
}
