//! Non-interactive output: plain-text table, JSON document, option lists.
//!
//! These back the `--print`, `--json` and `--list-*` flags and render the
//! same pipeline output the dashboard shows.

use crate::engine::Summary;
use crate::model::{CityRecord, Query};
use crate::view::format::{
    format_decimal, format_mean, format_thousands, pad_to_width, showing_count, truncate_to_width,
};
use serde::Serialize;

const NAME_WIDTH: usize = 18;
const STATE_WIDTH: usize = 18;
const REGION_WIDTH: usize = 10;

/// Plain-text table of `records` followed by the summary block.
///
/// Lines carry no trailing whitespace. An empty result prints
/// "No cities found" in place of the rows.
pub fn text_report(records: &[&CityRecord], summary: &Summary, total_cities: usize) -> String {
    let mut out = String::new();

    if records.is_empty() {
        out.push_str("No cities found\n");
    } else {
        out.push_str(&row(
            "Rank",
            "City",
            "State",
            "Region",
            "Population",
            "Area km²",
            "Literacy",
            "Density",
        ));
        for city in records {
            out.push_str(&row(
                &city.id.to_string(),
                &city.name,
                &city.state,
                city.region.as_str(),
                &format_thousands(city.total_population),
                &format_decimal(city.area, 1),
                &format!("{:.1}%", city.literacy_rate),
                &format_thousands(city.population_density.round() as u64),
            ));
        }
    }

    out.push('\n');
    out.push_str(&showing_count(summary.count, total_cities));
    out.push('\n');
    out.push_str(&format!(
        "Total population:  {}\n",
        format_thousands(summary.total_population)
    ));
    out.push_str(&format!(
        "Total area:        {} km²\n",
        format_decimal(summary.total_area, 1)
    ));
    out.push_str(&format!(
        "Avg literacy rate: {}\n",
        format_mean(summary.average_literacy_rate, 1, "%")
    ));
    out.push_str(&format!(
        "Avg density:       {}\n",
        format_mean(summary.average_density, 0, " /km²")
    ));
    out
}

#[allow(clippy::too_many_arguments)]
fn row(
    rank: &str,
    name: &str,
    state: &str,
    region: &str,
    population: &str,
    area: &str,
    literacy: &str,
    density: &str,
) -> String {
    format!(
        "{rank:>4}  {}  {}  {}  {population:>12}  {area:>10}  {literacy:>8}  {density:>8}\n",
        pad_to_width(&truncate_to_width(name, NAME_WIDTH), NAME_WIDTH),
        pad_to_width(&truncate_to_width(state, STATE_WIDTH), STATE_WIDTH),
        pad_to_width(region, REGION_WIDTH),
    )
}

/// JSON document with the query, the matching cities and the summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    /// Query that produced the result.
    pub query: &'a Query,
    /// Size of the whole dataset.
    pub total_cities: usize,
    /// Matching cities in display order.
    pub cities: &'a [&'a CityRecord],
    /// Aggregate of the matching cities.
    pub summary: &'a Summary,
}

impl<'a> JsonReport<'a> {
    /// Bundle a query result for serialization.
    pub fn new(
        query: &'a Query,
        cities: &'a [&'a CityRecord],
        summary: &'a Summary,
        total_cities: usize,
    ) -> Self {
        Self {
            query,
            total_cities,
            cities,
            summary,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// One option per line, for `--list-states` and `--list-regions`.
pub fn option_list(options: &[String]) -> String {
    options.iter().map(|o| format!("{o}\n")).collect()
}
