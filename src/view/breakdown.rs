//! Population breakdown charts over the whole dataset.
//!
//! Both charts ignore the current filters so the relative size of every
//! city stays visible while the table narrows.

use super::format::{format_compact, truncate_to_width};
use super::styles::Theme;
use crate::engine::sort;
use crate::model::{CityRecord, SortDirection, SortKey};
use ratatui::{
    layout::{Direction, Rect},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

const LABEL_WIDTH: usize = 10;

/// Rows one city takes in the male/female chart: two bars and a gap.
const GENDER_ROWS_PER_CITY: u16 = 3;

/// `records` ordered most populous first.
fn by_population<'a>(records: &[&'a CityRecord]) -> Vec<&'a CityRecord> {
    let mut sorted = records.to_vec();
    sort::sort(&mut sorted, SortKey::Population, SortDirection::Descending);
    sorted
}

/// Label width that leaves the bars at least half of the chart.
fn label_width(area: Rect) -> usize {
    LABEL_WIDTH.min(area.width.saturating_sub(2) as usize / 2)
}

fn chart_block(title: &'static str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(title)
}

/// Horizontal bars of every city in `records`, most populous first.
///
/// Only as many bars as fit in `area` are drawn. The selected city's bar is
/// highlighted.
pub fn render_population_breakdown(
    frame: &mut Frame,
    area: Rect,
    records: &[&CityRecord],
    selected_id: Option<u32>,
    theme: &Theme,
) {
    let mut cities = by_population(records);
    cities.truncate(area.height.saturating_sub(2) as usize);
    let label_width = label_width(area);

    let bars: Vec<Bar> = cities
        .iter()
        .map(|city| {
            let style = if Some(city.id) == selected_id {
                theme.bar_highlight
            } else {
                theme.bar
            };
            Bar::default()
                .label(Line::from(truncate_to_width(&city.name, label_width)))
                .value(city.total_population)
                .text_value(format_compact(city.total_population))
                .style(style)
                .value_style(theme.value)
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(" Population Breakdown ", theme))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Male and female bars side by side for each city, most populous first.
///
/// One group per city; the male bar carries the city name. The selected
/// city's name is highlighted.
pub fn render_gender_breakdown(
    frame: &mut Frame,
    area: Rect,
    records: &[&CityRecord],
    selected_id: Option<u32>,
    theme: &Theme,
) {
    let fits = (area.height.saturating_sub(2) + 1) / GENDER_ROWS_PER_CITY;
    let mut cities = by_population(records);
    cities.truncate(fits as usize);
    let label_width = label_width(area);

    let mut chart = BarChart::default()
        .block(chart_block(" Male vs Female Population ", theme))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .group_gap(1);

    for city in &cities {
        let label_style = if Some(city.id) == selected_id {
            theme.bar_highlight
        } else {
            theme.title
        };
        let bars = [
            Bar::default()
                .label(Line::styled(
                    truncate_to_width(&city.name, label_width),
                    label_style,
                ))
                .value(city.male_population)
                .text_value(format!("M {}", format_compact(city.male_population)))
                .style(theme.male)
                .value_style(theme.value),
            Bar::default()
                .value(city.female_population)
                .text_value(format!("F {}", format_compact(city.female_population)))
                .style(theme.female)
                .value_style(theme.value),
        ];
        chart = chart.data(BarGroup::default().bars(&bars));
    }

    frame.render_widget(chart, area);
}
