//! City comparison figures for the detail view.

use crate::model::{CityRecord, SortDirection, SortKey};

/// Number of cities shown in the comparison chart when not configured.
pub const DEFAULT_COMPARISON_COUNT: usize = 5;

/// The `n` most populous records, largest first.
///
/// Ties keep their incoming order. Returns fewer than `n` records when the
/// input is shorter.
pub fn top_by_population(records: &[CityRecord], n: usize) -> Vec<&CityRecord> {
    let mut sorted: Vec<&CityRecord> = records.iter().collect();
    super::sort::sort(&mut sorted, SortKey::Population, SortDirection::Descending);
    sorted.truncate(n);
    sorted
}

/// Growth percentage of each record, in the order given.
///
/// Absent growth counts as `0`. Values are rounded to one decimal.
pub fn growth_series<'a>(records: &[&'a CityRecord]) -> Vec<(&'a str, f64)> {
    records
        .iter()
        .map(|city| {
            let growth = CityProfile::from_record(city).growth_percentage;
            (city.name.as_str(), super::detail::round1(growth))
        })
        .collect()
}

/// One city's figures scaled so they sit on a comparable axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityProfile {
    /// Population in millions.
    pub population_millions: f64,
    /// Literacy rate in percent.
    pub literacy_rate: f64,
    /// Density in thousands per km².
    pub density_thousands: f64,
    /// Growth in percent, `0.0` when unknown.
    pub growth_percentage: f64,
}

impl CityProfile {
    /// Scale one record.
    pub fn from_record(city: &CityRecord) -> Self {
        Self {
            population_millions: city.total_population as f64 / 1_000_000.0,
            literacy_rate: city.literacy_rate,
            density_thousands: city.population_density / 1_000.0,
            growth_percentage: city.growth_or_zero() * 100.0,
        }
    }

    /// Labelled axis values, in display order.
    pub fn axes(&self) -> [(&'static str, f64); 4] {
        [
            ("Population (M)", self.population_millions),
            ("Literacy Rate", self.literacy_rate),
            ("Density (k/km²)", self.density_thousands),
            ("Growth Rate", self.growth_percentage),
        ]
    }
}
