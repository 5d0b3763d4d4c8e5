//! Query value: the current filter and sort selection.
//!
//! A `Query` has no identity beyond its field values. The UI rebuilds it on
//! every interaction and the engine treats it as read-only input.

use crate::model::{CityRecord, QueryError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// ===== SortKey =====

/// The five recognized sort keys.
///
/// Each key maps to a typed accessor through [`SortKey::value`], so adding a
/// key forces every `match` over it to be updated.
///
/// Serializes as snake_case. Deserializes through [`FromStr`], so a config
/// file accepts the same names as `--sort`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum SortKey {
    /// Total population.
    #[default]
    Population,
    /// Area in square kilometres.
    Area,
    /// Literacy percentage.
    LiteracyRate,
    /// People per square kilometre.
    Density,
    /// City name, case-insensitive.
    Name,
}

impl SortKey {
    /// All keys, in the order the UI cycles through them.
    pub const ALL: [SortKey; 5] = [
        SortKey::Population,
        SortKey::Area,
        SortKey::LiteracyRate,
        SortKey::Density,
        SortKey::Name,
    ];

    /// Extract the value this key sorts by.
    pub fn value(self, city: &CityRecord) -> SortValue<'_> {
        match self {
            SortKey::Population => SortValue::Count(city.total_population),
            SortKey::Area => SortValue::Number(Some(city.area)),
            SortKey::LiteracyRate => SortValue::Number(Some(city.literacy_rate)),
            SortKey::Density => SortValue::Number(Some(city.population_density)),
            SortKey::Name => SortValue::Text(&city.name),
        }
    }

    /// Human-readable label used by the filter bar.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Population => "Population",
            SortKey::Area => "Area",
            SortKey::LiteracyRate => "Literacy Rate",
            SortKey::Density => "Density",
            SortKey::Name => "Name",
        }
    }

    /// Next key in [`SortKey::ALL`], wrapping around.
    pub fn next(self) -> SortKey {
        let idx = SortKey::ALL.iter().position(|k| *k == self).unwrap_or(0);
        SortKey::ALL[(idx + 1) % SortKey::ALL.len()]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    /// Accepts the short CLI names and the dashboard's field names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "population" | "totalPopulation" | "total_population" => Ok(SortKey::Population),
            "area" => Ok(SortKey::Area),
            "literacy" | "literacyRate" | "literacy_rate" => Ok(SortKey::LiteracyRate),
            "density" | "populationDensity" | "population_density" => Ok(SortKey::Density),
            "name" => Ok(SortKey::Name),
            other => Err(QueryError::UnknownSortKey(other.to_string())),
        }
    }
}

impl TryFrom<String> for SortKey {
    type Error = QueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ===== SortValue =====

/// A sort key's value for one record.
///
/// Counts compare exactly as integers. Measurements are `Option<f64>` so
/// that absent values have an explicit comparison default of `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    /// Whole-number figure such as a population.
    Count(u64),
    /// Measured figure; `None` compares as `0`.
    Number(Option<f64>),
    /// Text compared case-insensitively.
    Text(&'a str),
}

impl SortValue<'_> {
    /// Ascending comparison.
    ///
    /// Counts compare as `u64`; numbers compare with `f64::total_cmp` after
    /// defaulting `None` to `0`; text compares lowercased. Both sides always
    /// come from the same key, so they are the same kind.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Count(a), SortValue::Count(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.unwrap_or(0.0).total_cmp(&b.unwrap_or(0.0))
            }
            (SortValue::Text(a), SortValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            // Mixed kinds cannot come from one key; order by kind so the
            // order stays total anyway.
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            SortValue::Count(_) => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) => 2,
        }
    }
}

// ===== SortDirection =====

/// Order of the sorted result. Defaults to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first.
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first.
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggle(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Arrow shown next to the sort key in the filter bar.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(QueryError::UnknownSortDirection(s.to_string())),
        }
    }
}

// ===== Query =====

/// Filter and sort selection applied to the dataset.
///
/// Empty strings and `None` both mean "no filter" for the state and region
/// filters, so values coming straight from a cleared text box behave the
/// same as an explicit `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Case-insensitive substring matched against name or state.
    pub search_term: String,
    /// Exact state name to keep.
    pub state_filter: Option<String>,
    /// Exact region display name to keep.
    pub region_filter: Option<String>,
    /// Column to sort by.
    pub sort_key: SortKey,
    /// Direction to sort in.
    pub sort_direction: SortDirection,
}

impl Query {
    /// Match everything, most populous first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Keep only cities in `state`.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state_filter = Some(state.into());
        self
    }

    /// Keep only cities in `region`.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region_filter = Some(region.into());
        self
    }

    /// Set the sort column and direction.
    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.sort_direction = direction;
        self
    }

    /// State filter, treating an empty string as absent.
    pub fn active_state_filter(&self) -> Option<&str> {
        self.state_filter.as_deref().filter(|s| !s.is_empty())
    }

    /// Region filter, treating an empty string as absent.
    pub fn active_region_filter(&self) -> Option<&str> {
        self.region_filter.as_deref().filter(|s| !s.is_empty())
    }

    /// True when no clause of the filter predicate is active.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.active_state_filter().is_none()
            && self.active_region_filter().is_none()
    }
}
