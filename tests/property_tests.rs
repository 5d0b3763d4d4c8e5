//! Property-based tests for the filter–sort–aggregate pipeline.
//!
//! Tests validate:
//! 1. Every returned record satisfies all filter clauses
//! 2. An empty query returns the whole dataset
//! 3. Sorting is ordered, stable and reversible
//! 4. The same query twice yields the same result
//! 5. Aggregates match the records they summarize

use citydash::engine::{aggregate, run_query, sort::compare};
use citydash::model::{CityRecord, Dataset, Query, Region, SortDirection, SortKey};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;

const STATES: [&str; 5] = ["Bihar", "Delhi", "Goa", "Kerala", "Tamil Nadu"];
const REGIONS: [Region; 6] = [
    Region::Central,
    Region::East,
    Region::North,
    Region::NorthEast,
    Region::South,
    Region::West,
];

// ===== Strategies =====

type Row = (String, &'static str, Region, u64, f64, f64, Option<f64>);

fn row_strategy() -> impl Strategy<Value = Row> {
    (
        "[A-Z][a-z]{1,8}",
        prop::sample::select(STATES.to_vec()),
        prop::sample::select(REGIONS.to_vec()),
        1u64..30_000_000,
        1.0f64..5_000.0,
        0.0f64..100.0,
        prop::option::of(-0.5f64..1.5),
    )
}

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(row_strategy(), 0..40).prop_map(|rows| {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, (name, state, region, population, area, literacy, growth))| {
                let male = population / 2;
                CityRecord {
                    id: i as u32 + 1,
                    name,
                    state: state.to_string(),
                    region,
                    total_population: population,
                    male_population: male,
                    female_population: population - male,
                    area,
                    population_density: (population as f64 / area).round(),
                    literacy_rate: literacy,
                    established_year: 1800,
                    population_growth: growth,
                    urban_area: None,
                }
            })
            .collect();
        Dataset::new(records).expect("generated rows are valid")
    })
}

fn query_strategy() -> impl Strategy<Value = Query> {
    (
        "[a-z]{0,2}",
        prop::option::of(prop::sample::select(STATES.to_vec())),
        prop::option::of(prop::sample::select(REGIONS.to_vec())),
        prop::sample::select(SortKey::ALL.to_vec()),
        prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)],
    )
        .prop_map(|(search, state, region, key, direction)| Query {
            search_term: search,
            state_filter: state.map(str::to_string),
            region_filter: region.map(|r| r.as_str().to_string()),
            sort_key: key,
            sort_direction: direction,
        })
}

fn ids(records: &[&CityRecord]) -> Vec<u32> {
    records.iter().map(|c| c.id).collect()
}

// ===== Property 1: Filter soundness and completeness =====

proptest! {
    #[test]
    fn every_result_satisfies_all_clauses(ds in dataset_strategy(), query in query_strategy()) {
        let needle = query.search_term.to_lowercase();
        for city in run_query(&ds, &query) {
            prop_assert!(
                city.name.to_lowercase().contains(&needle)
                    || city.state.to_lowercase().contains(&needle)
            );
            if let Some(state) = &query.state_filter {
                prop_assert_eq!(&city.state, state);
            }
            if let Some(region) = &query.region_filter {
                prop_assert_eq!(city.region.as_str(), region.as_str());
            }
        }
    }

    #[test]
    fn no_matching_record_is_dropped(ds in dataset_strategy(), query in query_strategy()) {
        let needle = query.search_term.to_lowercase();
        let expected = ds
            .all()
            .iter()
            .filter(|c| {
                (c.name.to_lowercase().contains(&needle) || c.state.to_lowercase().contains(&needle))
                    && query.state_filter.as_ref().is_none_or(|s| &c.state == s)
                    && query.region_filter.as_ref().is_none_or(|r| c.region.as_str() == r.as_str())
            })
            .count();
        prop_assert_eq!(run_query(&ds, &query).len(), expected);
    }
}

// ===== Property 2: Empty query =====

proptest! {
    #[test]
    fn empty_query_returns_whole_dataset(ds in dataset_strategy()) {
        let result = run_query(&ds, &Query::new());
        let returned: HashSet<u32> = result.iter().map(|c| c.id).collect();
        let all: HashSet<u32> = ds.all().iter().map(|c| c.id).collect();
        prop_assert_eq!(result.len(), ds.len());
        prop_assert_eq!(returned, all);
    }
}

// ===== Property 3: Ordering =====

proptest! {
    #[test]
    fn result_is_sorted_and_stable(ds in dataset_strategy(), query in query_strategy()) {
        let result = run_query(&ds, &query);
        for pair in result.windows(2) {
            let ordering = compare(pair[0], pair[1], query.sort_key, query.sort_direction);
            prop_assert_ne!(ordering, Ordering::Greater);
            // Ids follow dataset order, so ties must keep ascending ids.
            if ordering == Ordering::Equal {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn descending_reverses_ascending_without_ties(ds in dataset_strategy()) {
        let asc = run_query(&ds, &Query::new().sorted_by(SortKey::Population, SortDirection::Ascending));
        let populations: HashSet<u64> = asc.iter().map(|c| c.total_population).collect();
        prop_assume!(populations.len() == asc.len());

        let desc = run_query(&ds, &Query::new().sorted_by(SortKey::Population, SortDirection::Descending));
        let mut reversed = ids(&asc);
        reversed.reverse();
        prop_assert_eq!(ids(&desc), reversed);
    }
}

// ===== Property 4: Idempotence =====

proptest! {
    #[test]
    fn same_query_same_result(ds in dataset_strategy(), query in query_strategy()) {
        prop_assert_eq!(ids(&run_query(&ds, &query)), ids(&run_query(&ds, &query)));
    }
}

// ===== Property 5: Aggregates =====

proptest! {
    #[test]
    fn aggregate_matches_records(ds in dataset_strategy(), query in query_strategy()) {
        let result = run_query(&ds, &query);
        let summary = aggregate(result.iter().copied());

        prop_assert_eq!(summary.count, result.len());
        prop_assert_eq!(
            summary.total_population,
            result.iter().map(|c| c.total_population).sum::<u64>()
        );
        prop_assert_eq!(summary.average_literacy_rate.is_none(), result.is_empty());
        prop_assert_eq!(summary.average_density.is_none(), result.is_empty());

        if let Some(mean) = summary.average_literacy_rate {
            let min = result.iter().map(|c| c.literacy_rate).fold(f64::INFINITY, f64::min);
            let max = result.iter().map(|c| c.literacy_rate).fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(mean >= min - 1e-9 && mean <= max + 1e-9);
        }
    }
}
