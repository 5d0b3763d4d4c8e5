//! Filter predicate.

use crate::model::{CityRecord, Query};

/// Lowercased search term prepared once per query.
///
/// Keeps the per-record check to a pair of substring scans instead of
/// lowercasing the term for every row.
#[derive(Debug, Clone)]
pub struct Matcher<'q> {
    needle: String,
    state: Option<&'q str>,
    region: Option<&'q str>,
}

impl<'q> Matcher<'q> {
    /// Borrow the clauses of `query`, lowercasing the search term once.
    pub fn new(query: &'q Query) -> Self {
        Self {
            needle: query.search_term.to_lowercase(),
            state: query.active_state_filter(),
            region: query.active_region_filter(),
        }
    }

    /// True iff the record satisfies all three clauses:
    /// search text on name or state, exact state, exact region.
    pub fn matches(&self, city: &CityRecord) -> bool {
        self.matches_search(city) && self.matches_state(city) && self.matches_region(city)
    }

    fn matches_search(&self, city: &CityRecord) -> bool {
        self.needle.is_empty()
            || city.name.to_lowercase().contains(&self.needle)
            || city.state.to_lowercase().contains(&self.needle)
    }

    fn matches_state(&self, city: &CityRecord) -> bool {
        self.state.is_none_or(|s| city.state == s)
    }

    fn matches_region(&self, city: &CityRecord) -> bool {
        self.region.is_none_or(|r| city.region.as_str() == r)
    }
}

/// Records matching `query`, in dataset order.
pub fn filter<'a>(records: &'a [CityRecord], query: &Query) -> Vec<&'a CityRecord> {
    let matcher = Matcher::new(query);
    records.iter().filter(|c| matcher.matches(c)).collect()
}
