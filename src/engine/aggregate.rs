//! Aggregate summary over an arbitrary subset of records.

use crate::model::CityRecord;
use serde::Serialize;

/// Sum and mean statistics for the stat tiles.
///
/// # Empty subsets
///
/// Sums are `0` and both means are `None`. The renderer decides how to show
/// an undefined mean; the engine never substitutes `0` for it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of records summarized.
    pub count: usize,
    /// Sum of total populations.
    pub total_population: u64,
    /// Sum of areas in km².
    pub total_area: f64,
    /// Mean literacy rate, `None` for an empty subset.
    pub average_literacy_rate: Option<f64>,
    /// Mean population density, `None` for an empty subset.
    pub average_density: Option<f64>,
}

impl Summary {
    /// True when no records were summarized.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Aggregate any subset. Callers choose the subset (filtered result, the
/// full dataset, a top-N slice).
pub fn aggregate<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a CityRecord>,
{
    let mut count = 0usize;
    let mut total_population = 0u64;
    let mut total_area = 0.0;
    let mut literacy_sum = 0.0;
    let mut density_sum = 0.0;

    for city in records {
        count += 1;
        total_population += city.total_population;
        total_area += city.area;
        literacy_sum += city.literacy_rate;
        density_sum += city.population_density;
    }

    let mean = |sum: f64| (count > 0).then(|| sum / count as f64);

    Summary {
        count,
        total_population,
        total_area,
        average_literacy_rate: mean(literacy_sum),
        average_density: mean(density_sum),
    }
}
