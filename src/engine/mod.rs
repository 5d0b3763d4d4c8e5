//! Filter–sort–aggregate pipeline (pure).
//!
//! Every function here is a total, synchronous function of its inputs. The
//! dataset is only ever borrowed, so running the same query twice yields
//! the same records in the same order.

pub mod aggregate;
pub mod comparison;
pub mod detail;
pub mod filter;
pub mod sort;

pub use aggregate::{aggregate, Summary};
pub use comparison::{growth_series, top_by_population, CityProfile, DEFAULT_COMPARISON_COUNT};
pub use detail::{CityDetail, NATIONAL_LITERACY_AVERAGE};

use crate::model::{CityRecord, Dataset, Query};

/// Filter then stable-sort the dataset.
pub fn run_query<'a>(dataset: &'a Dataset, query: &Query) -> Vec<&'a CityRecord> {
    let mut matched = filter::filter(dataset.all(), query);
    sort::sort(&mut matched, query.sort_key, query.sort_direction);
    matched
}

// ===== QueryCache =====

/// Memoized query output.
///
/// Holds ids rather than references so it can live inside long-lived UI
/// state next to the `'static` dataset without borrowing it. Recomputes
/// only when the query differs from the last one seen.
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    last_query: Option<Query>,
    ids: Vec<u32>,
    summary: Summary,
    recomputations: usize,
}

impl QueryCache {
    /// Empty cache; the first refresh always recomputes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the cache up to date with `query`.
    ///
    /// Returns `true` when a recomputation happened.
    pub fn refresh(&mut self, dataset: &Dataset, query: &Query) -> bool {
        if self.last_query.as_ref() == Some(query) {
            return false;
        }
        let result = run_query(dataset, query);
        self.summary = aggregate(result.iter().copied());
        self.ids = result.iter().map(|c| c.id).collect();
        self.last_query = Some(query.clone());
        self.recomputations += 1;
        tracing::debug!(
            matches = self.ids.len(),
            recomputations = self.recomputations,
            "Query recomputed"
        );
        true
    }

    /// Ids of the current result, in display order.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// Resolve the current result against the dataset.
    pub fn records<'a>(&self, dataset: &'a Dataset) -> Vec<&'a CityRecord> {
        self.ids.iter().filter_map(|id| dataset.get(*id)).collect()
    }

    /// Aggregate of the current result.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Number of matching cities.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing matches.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// How many times the pipeline actually ran.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
