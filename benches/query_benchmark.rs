//! Query pipeline benchmarks.
//!
//! The dashboard reruns the pipeline on every keystroke in the search box,
//! so filter plus sort over a dataset far larger than the bundled one should
//! stay well inside a frame.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use citydash::engine::{aggregate, run_query, QueryCache};
use citydash::model::{CityRecord, Dataset, Query, Region, SortDirection, SortKey};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const NUM_CITIES: usize = 50_000;

const STATES: [&str; 8] = [
    "Maharashtra",
    "Tamil Nadu",
    "Karnataka",
    "Gujarat",
    "Uttar Pradesh",
    "West Bengal",
    "Rajasthan",
    "Kerala",
];

const REGIONS: [Region; 6] = [
    Region::Central,
    Region::East,
    Region::North,
    Region::NorthEast,
    Region::South,
    Region::West,
];

/// Deterministic synthetic dataset with varied names and metrics.
fn generate_large_dataset() -> Dataset {
    let records = (0..NUM_CITIES)
        .map(|i| {
            let population = 100_000 + ((i as u64 * 7_919) % 20_000_000);
            let area = 50.0 + (i % 1_500) as f64 * 0.7;
            let male = population / 2 + (i as u64 % 1_000);
            CityRecord {
                id: i as u32 + 1,
                name: format!("City{i:05}"),
                state: STATES[i % STATES.len()].to_string(),
                region: REGIONS[i % REGIONS.len()],
                total_population: population,
                male_population: male,
                female_population: population - male,
                area,
                population_density: (population as f64 / area).round(),
                literacy_rate: 60.0 + (i % 400) as f64 / 10.0,
                established_year: 1500 + (i % 500) as i32,
                population_growth: (i % 4 != 0).then(|| (i % 90) as f64 / 100.0),
                urban_area: None,
            }
        })
        .collect();
    Dataset::new(records).expect("synthetic rows are valid")
}

fn benchmark_query(c: &mut Criterion) {
    let dataset = generate_large_dataset();

    c.bench_function("query_50k_unfiltered_population_desc", |b| {
        let query = Query::new();
        b.iter(|| black_box(run_query(black_box(&dataset), black_box(&query))))
    });

    c.bench_function("query_50k_search_and_state", |b| {
        let query = Query::new().with_search("city1").with_state("Kerala");
        b.iter(|| black_box(run_query(black_box(&dataset), black_box(&query))))
    });

    c.bench_function("query_50k_sort_by_name_asc", |b| {
        let query = Query::new().sorted_by(SortKey::Name, SortDirection::Ascending);
        b.iter(|| black_box(run_query(black_box(&dataset), black_box(&query))))
    });

    c.bench_function("aggregate_50k", |b| {
        let records = run_query(&dataset, &Query::new());
        b.iter(|| black_box(aggregate(black_box(records.iter().copied()))))
    });

    c.bench_function("query_cache_hit_50k", |b| {
        let query = Query::new().with_region("South");
        let mut cache = QueryCache::new();
        cache.refresh(&dataset, &query);
        b.iter(|| black_box(cache.refresh(black_box(&dataset), black_box(&query))))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(5));
    targets = benchmark_query
}

criterion_main!(benches);
