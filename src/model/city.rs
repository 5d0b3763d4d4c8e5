//! City record and geographic region types.

use serde::{Deserialize, Serialize};
use std::fmt;

// ===== Region =====

/// Geographic zone a city belongs to.
///
/// Filtering and the region picker work on the display name returned by
/// [`Region::as_str`], so the set of names here is the set users can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    /// Central India.
    Central,
    /// Eastern India.
    East,
    /// Northern India, including Delhi.
    North,
    /// North-eastern India, serialized as `"North East"`.
    #[serde(rename = "North East")]
    NorthEast,
    /// Southern India.
    South,
    /// Western India.
    West,
}

impl Region {
    /// Display name, also used for exact-match region filtering.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Central => "Central",
            Region::East => "East",
            Region::North => "North",
            Region::NorthEast => "North East",
            Region::South => "South",
            Region::West => "West",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== CityRecord =====

/// One row of the dataset.
///
/// # Invariants (checked by `Dataset::new`, not here)
///
/// - `id` is unique and positive; it doubles as the display rank
/// - `male_population + female_population == total_population`
/// - `total_population > 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRecord {
    /// Population rank, unique and positive.
    pub id: u32,
    /// City name.
    pub name: String,
    /// State or union territory.
    pub state: String,
    /// Geographic zone.
    pub region: Region,
    /// 2011 census population.
    pub total_population: u64,
    /// Male part of `total_population`.
    pub male_population: u64,
    /// Female part of `total_population`.
    pub female_population: u64,
    /// Square kilometres.
    pub area: f64,
    /// People per square kilometre.
    pub population_density: f64,
    /// Percentage in `[0, 100]`.
    pub literacy_rate: f64,
    /// Year the city was founded.
    pub established_year: i32,
    /// Growth as a fraction (0.12 means 12%). Absent for some cities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_growth: Option<f64>,
    /// Name of the wider urban agglomeration, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urban_area: Option<String>,
}

impl CityRecord {
    /// Growth fraction with the documented default of `0` when absent.
    pub fn growth_or_zero(&self) -> f64 {
        self.population_growth.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CityRecord {
        CityRecord {
            id: 1,
            name: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            region: Region::West,
            total_population: 20,
            male_population: 11,
            female_population: 9,
            area: 603.4,
            population_density: 20_694.0,
            literacy_rate: 89.7,
            established_year: 1507,
            population_growth: None,
            urban_area: None,
        }
    }

    #[test]
    fn region_display_matches_filter_name() {
        assert_eq!(Region::NorthEast.to_string(), "North East");
        assert_eq!(Region::West.as_str(), "West");
    }

    #[test]
    fn regions_order_alphabetically_by_name() {
        let mut regions = vec![Region::West, Region::Central, Region::NorthEast, Region::North];
        regions.sort();
        let names: Vec<_> = regions.iter().map(|r| r.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn growth_defaults_to_zero_when_absent() {
        let mut city = sample();
        assert_eq!(city.growth_or_zero(), 0.0);
        city.population_growth = Some(0.25);
        assert_eq!(city.growth_or_zero(), 0.25);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["totalPopulation"], 20);
        assert_eq!(json["region"], "West");
        assert!(json.get("populationGrowth").is_none());
    }

    #[test]
    fn north_east_serializes_with_space() {
        let json = serde_json::to_value(Region::NorthEast).expect("serialize");
        assert_eq!(json, "North East");
    }
}
