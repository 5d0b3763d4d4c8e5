//! Per-city drill-down figures for the detail view.

use crate::model::{CityRecord, DatasetError};

/// National literacy average the detail view compares against.
pub const NATIONAL_LITERACY_AVERAGE: f64 = 77.7;

/// Years of the density trend series and the share of current density each
/// year is drawn at.
pub const DENSITY_TREND: [(u16, f64); 4] = [(2011, 0.8), (2015, 0.9), (2020, 0.95), (2024, 1.0)];

/// Round to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Derived display ratios for one city.
#[derive(Debug, Clone, PartialEq)]
pub struct CityDetail {
    /// Male share of the population, in percent.
    pub male_percentage: f64,
    /// Female share of the population, in percent.
    pub female_percentage: f64,
    /// `population_growth * 100`, with absent growth shown as `0.0`.
    pub growth_percentage: f64,
    /// Urban area, or a placeholder when unknown.
    pub urban_area_label: String,
    /// Years since the city was established, relative to `reference_year`.
    pub city_age: i32,
    /// City literacy minus the national average, in percentage points.
    pub literacy_gap: f64,
    /// Estimated density per census year, oldest first.
    pub density_trend: Vec<(u16, f64)>,
}

impl CityDetail {
    /// Compute the detail figures.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ZeroPopulation`] when the record has no
    /// population, instead of producing NaN percentages.
    pub fn from_record(city: &CityRecord, reference_year: i32) -> Result<Self, DatasetError> {
        if city.total_population == 0 {
            return Err(DatasetError::ZeroPopulation { id: city.id });
        }
        let total = city.total_population as f64;

        Ok(Self {
            male_percentage: round1(city.male_population as f64 / total * 100.0),
            female_percentage: round1(city.female_population as f64 / total * 100.0),
            growth_percentage: round1(city.growth_or_zero() * 100.0),
            urban_area_label: city
                .urban_area
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            city_age: reference_year - city.established_year,
            literacy_gap: round1(city.literacy_rate - NATIONAL_LITERACY_AVERAGE),
            density_trend: DENSITY_TREND
                .iter()
                .map(|(year, share)| (*year, city.population_density * share))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Region;

    fn record(total: u64, male: u64) -> CityRecord {
        CityRecord {
            id: 9,
            name: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            region: Region::West,
            total_population: total,
            male_population: male,
            female_population: total - male,
            area: 331.3,
            population_density: 1000.0,
            literacy_rate: 91.61,
            established_year: 847,
            population_growth: Some(0.2269),
            urban_area: Some("Pune Metropolitan Region".to_string()),
        }
    }

    #[test]
    fn percentages_round_to_one_decimal() {
        let detail = CityDetail::from_record(&record(3, 1), 2024).unwrap();
        assert_eq!(detail.male_percentage, 33.3);
        assert_eq!(detail.female_percentage, 66.7);
    }

    #[test]
    fn round1_rounds_half_away_from_zero() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(-0.25), -0.3);
        assert_eq!(round1(12.34), 12.3);
    }

    #[test]
    fn zero_population_is_an_error() {
        let mut city = record(10, 5);
        city.total_population = 0;
        assert_eq!(
            CityDetail::from_record(&city, 2024),
            Err(DatasetError::ZeroPopulation { id: 9 })
        );
    }

    #[test]
    fn growth_defaults_to_zero() {
        let mut city = record(10, 5);
        city.population_growth = None;
        let detail = CityDetail::from_record(&city, 2024).unwrap();
        assert_eq!(detail.growth_percentage, 0.0);
    }

    #[test]
    fn growth_is_shown_as_percentage() {
        let detail = CityDetail::from_record(&record(10, 5), 2024).unwrap();
        assert_eq!(detail.growth_percentage, 22.7);
    }

    #[test]
    fn missing_urban_area_is_labelled() {
        let mut city = record(10, 5);
        city.urban_area = None;
        let detail = CityDetail::from_record(&city, 2024).unwrap();
        assert_eq!(detail.urban_area_label, "N/A");
    }

    #[test]
    fn age_and_literacy_gap() {
        let detail = CityDetail::from_record(&record(10, 5), 2024).unwrap();
        assert_eq!(detail.city_age, 1177);
        assert_eq!(detail.literacy_gap, 13.9);
    }

    #[test]
    fn density_trend_scales_current_density() {
        let detail = CityDetail::from_record(&record(10, 5), 2024).unwrap();
        assert_eq!(
            detail.density_trend,
            vec![(2011, 800.0), (2015, 900.0), (2020, 950.0), (2024, 1000.0)]
        );
    }
}
