//! The immutable, ordered set of city records.

use crate::model::{data, CityRecord, DatasetError};
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Canonical ordered sequence of city records.
///
/// Built once and never mutated afterwards. Every read is a shared borrow,
/// so a `&Dataset` can be read from any thread without synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<CityRecord>,
}

impl Dataset {
    /// Validate records and build a dataset.
    ///
    /// # Errors
    ///
    /// Returns the first integrity violation found: a zero or duplicate id,
    /// a zero total population, or a gender split that does not sum to the
    /// total.
    pub fn new(records: Vec<CityRecord>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id == 0 {
                return Err(DatasetError::ZeroId {
                    name: record.name.clone(),
                });
            }
            if !seen.insert(record.id) {
                return Err(DatasetError::DuplicateId { id: record.id });
            }
            if record.total_population == 0 {
                return Err(DatasetError::ZeroPopulation { id: record.id });
            }
            if record.male_population + record.female_population != record.total_population {
                return Err(DatasetError::GenderMismatch {
                    id: record.id,
                    male: record.male_population,
                    female: record.female_population,
                    total: record.total_population,
                });
            }
        }
        Ok(Self { records })
    }

    /// The compiled-in dataset, built on first access.
    ///
    /// The bundled rows are covered by `bundled_dataset_passes_validation`;
    /// they are not re-validated at runtime.
    pub fn bundled() -> &'static Dataset {
        static BUNDLED: OnceLock<Dataset> = OnceLock::new();
        BUNDLED.get_or_init(|| Dataset {
            records: data::cities(),
        })
    }

    /// All records in canonical order.
    pub fn all(&self) -> &[CityRecord] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: u32) -> Option<&CityRecord> {
        self.records.iter().find(|c| c.id == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True for a dataset with no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct state names, sorted lexicographically.
    pub fn distinct_states(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|c| c.state.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct region names, sorted lexicographically.
    pub fn distinct_regions(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|c| c.region.as_str().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Region;

    fn record(id: u32, name: &str, state: &str, region: Region) -> CityRecord {
        CityRecord {
            id,
            name: name.to_string(),
            state: state.to_string(),
            region,
            total_population: 100,
            male_population: 60,
            female_population: 40,
            area: 1.0,
            population_density: 100.0,
            literacy_rate: 80.0,
            established_year: 1900,
            population_growth: None,
            urban_area: None,
        }
    }

    #[test]
    fn bundled_dataset_passes_validation() {
        let bundled = Dataset::bundled();
        let rebuilt = Dataset::new(bundled.all().to_vec());
        assert_eq!(rebuilt.as_ref(), Ok(bundled));
    }

    #[test]
    fn bundled_returns_same_instance() {
        assert!(std::ptr::eq(Dataset::bundled(), Dataset::bundled()));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Dataset::new(vec![
            record(1, "A", "S", Region::North),
            record(1, "B", "S", Region::North),
        ]);
        assert_eq!(result, Err(DatasetError::DuplicateId { id: 1 }));
    }

    #[test]
    fn rejects_zero_id() {
        let result = Dataset::new(vec![record(0, "A", "S", Region::North)]);
        assert!(matches!(result, Err(DatasetError::ZeroId { .. })));
    }

    #[test]
    fn rejects_zero_population() {
        let mut empty = record(4, "Ghost", "S", Region::East);
        empty.total_population = 0;
        empty.male_population = 0;
        empty.female_population = 0;
        assert_eq!(
            Dataset::new(vec![empty]),
            Err(DatasetError::ZeroPopulation { id: 4 })
        );
    }

    #[test]
    fn rejects_gender_mismatch() {
        let mut bad = record(2, "A", "S", Region::South);
        bad.female_population = 41;
        assert!(matches!(
            Dataset::new(vec![bad]),
            Err(DatasetError::GenderMismatch { id: 2, .. })
        ));
    }

    #[test]
    fn distinct_states_are_sorted_and_deduplicated() {
        let ds = Dataset::new(vec![
            record(1, "A", "Maharashtra", Region::West),
            record(2, "B", "Delhi", Region::North),
            record(3, "C", "Maharashtra", Region::West),
        ])
        .unwrap();
        assert_eq!(ds.distinct_states(), vec!["Delhi", "Maharashtra"]);
    }

    #[test]
    fn distinct_regions_are_sorted_by_name() {
        let ds = Dataset::new(vec![
            record(1, "A", "S", Region::West),
            record(2, "B", "S", Region::NorthEast),
            record(3, "C", "S", Region::North),
            record(4, "D", "S", Region::West),
        ])
        .unwrap();
        assert_eq!(ds.distinct_regions(), vec!["North", "North East", "West"]);
    }

    #[test]
    fn bundled_covers_all_regions() {
        assert_eq!(
            Dataset::bundled().distinct_regions(),
            vec!["Central", "East", "North", "North East", "South", "West"]
        );
    }

    #[test]
    fn get_finds_record_by_id() {
        let ds = Dataset::bundled();
        assert_eq!(ds.get(1).map(|c| c.name.as_str()), Some("Mumbai"));
        assert!(ds.get(999).is_none());
    }
}
