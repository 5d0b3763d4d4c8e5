//! Sort comparator.

use crate::model::{CityRecord, SortDirection, SortKey};
use std::cmp::Ordering;

/// Compare two records by `key` in `direction`.
///
/// This is a total order for every key: numbers go through `f64::total_cmp`
/// and names through lowercase string comparison.
pub fn compare(a: &CityRecord, b: &CityRecord, key: SortKey, direction: SortDirection) -> Ordering {
    direction.apply(key.value(a).compare(&key.value(b)))
}

/// Sort in place. Stable: equal keys keep their incoming relative order in
/// both directions.
pub fn sort(records: &mut [&CityRecord], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| compare(a, b, key, direction));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Region;

    fn record(id: u32, name: &str, population: u64, literacy: f64) -> CityRecord {
        CityRecord {
            id,
            name: name.to_string(),
            state: "S".to_string(),
            region: Region::South,
            total_population: population,
            male_population: population,
            female_population: 0,
            area: id as f64,
            population_density: population as f64 / id as f64,
            literacy_rate: literacy,
            established_year: 1900,
            population_growth: None,
            urban_area: None,
        }
    }

    fn ids(rows: &[&CityRecord]) -> Vec<u32> {
        rows.iter().map(|c| c.id).collect()
    }

    #[test]
    fn population_descending_puts_largest_first() {
        let rows = [record(1, "a", 10, 1.0), record(2, "b", 30, 1.0), record(3, "c", 20, 1.0)];
        let mut refs: Vec<_> = rows.iter().collect();
        sort(&mut refs, SortKey::Population, SortDirection::Descending);
        assert_eq!(ids(&refs), vec![2, 3, 1]);
    }

    #[test]
    fn name_ascending_ignores_case() {
        let rows = [record(1, "mumbai", 1, 1.0), record(2, "Delhi", 1, 1.0), record(3, "agra", 1, 1.0)];
        let mut refs: Vec<_> = rows.iter().collect();
        sort(&mut refs, SortKey::Name, SortDirection::Ascending);
        assert_eq!(ids(&refs), vec![3, 2, 1]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let rows = [
            record(1, "a", 5, 80.0),
            record(2, "b", 5, 90.0),
            record(3, "c", 5, 80.0),
            record(4, "d", 5, 90.0),
        ];
        let mut asc: Vec<_> = rows.iter().collect();
        sort(&mut asc, SortKey::LiteracyRate, SortDirection::Ascending);
        assert_eq!(ids(&asc), vec![1, 3, 2, 4]);

        let mut desc: Vec<_> = rows.iter().collect();
        sort(&mut desc, SortKey::LiteracyRate, SortDirection::Descending);
        assert_eq!(ids(&desc), vec![2, 4, 1, 3]);
    }

    #[test]
    fn compare_is_antisymmetric() {
        let a = record(1, "a", 10, 1.0);
        let b = record(2, "b", 20, 1.0);
        for key in SortKey::ALL {
            for dir in [SortDirection::Ascending, SortDirection::Descending] {
                assert_eq!(compare(&a, &b, key, dir), compare(&b, &a, key, dir).reverse());
            }
        }
    }

    #[test]
    fn area_sorts_numerically_not_lexically() {
        // Area equals id here, so 10 must come after 9 ascending.
        let rows = [record(10, "x", 1, 1.0), record(9, "y", 1, 1.0)];
        let mut refs: Vec<_> = rows.iter().collect();
        sort(&mut refs, SortKey::Area, SortDirection::Ascending);
        assert_eq!(ids(&refs), vec![9, 10]);
    }
}
