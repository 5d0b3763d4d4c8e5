//! Dashboard layout rendering.
//!
//! Header, stat tiles, filter bar, then the city table beside the
//! population and male/female breakdowns, with a status bar at the bottom. Overlays draw on
//! top of everything.

use super::breakdown::{render_gender_breakdown, render_population_breakdown};
use super::city_table::render_city_table;
use super::constants::{
    FILTER_BAR_HEIGHT, HEADER_HEIGHT, STATUS_BAR_HEIGHT, STAT_TILES_HEIGHT, TABLE_WIDTH_PERCENT,
};
use super::detail::render_detail_modal;
use super::filter_bar::FilterBar;
use super::format::showing_count;
use super::help::render_help_overlay;
use super::stats::StatTiles;
use super::styles::Theme;
use crate::engine::top_by_population;
use crate::model::{CityRecord, Dataset};
use crate::state::{AppState, Overlay};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Render the whole dashboard for `state`.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    dataset: &Dataset,
    theme: &Theme,
    reference_year: i32,
) {
    frame.render_widget(Block::default().style(theme.base), frame.area());

    let [header_area, tiles_area, filter_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(STAT_TILES_HEIGHT),
        Constraint::Length(FILTER_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(frame.area());

    render_header(frame, header_area, state, theme);
    frame.render_widget(
        StatTiles::new(state.summary(), dataset.len(), theme),
        tiles_area,
    );
    frame.render_widget(FilterBar::new(state.query(), state.search(), theme), filter_area);

    let [table_area, chart_area] = Layout::horizontal([
        Constraint::Percentage(TABLE_WIDTH_PERCENT),
        Constraint::Percentage(100 - TABLE_WIDTH_PERCENT),
    ])
    .areas(body_area);

    let records = state.results(dataset);
    render_city_table(frame, table_area, &records, state.selected_index(), theme);

    let [population_area, gender_area] =
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(chart_area);
    let all: Vec<&CityRecord> = dataset.all().iter().collect();
    render_population_breakdown(frame, population_area, &all, state.selected_id(), theme);
    render_gender_breakdown(frame, gender_area, &all, state.selected_id(), theme);

    render_status_bar(frame, status_area, state, dataset, theme);

    match state.overlay {
        Overlay::Detail(_) => {
            if let Some(city) = state.detail_city(dataset) {
                let top = top_by_population(dataset.all(), state.comparison_count);
                render_detail_modal(frame, city, &top, reference_year, theme);
            }
        }
        Overlay::Help => render_help_overlay(frame, theme),
        Overlay::None => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mode = if state.dark_mode { "dark" } else { "light" };
    let line = Line::from(vec![
        Span::styled(" City Demographics Dashboard ", theme.header),
        Span::styled(format!("  [{mode}]"), theme.muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar with the result count and keyboard hints.
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    dataset: &Dataset,
    theme: &Theme,
) {
    let hints = if state.search().is_editing() {
        "Enter: keep · Esc: clear · ←/→: move cursor"
    } else {
        "/: search · s/r: state/region · o/d: sort · Enter: details · ?: help · q: quit"
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", showing_count(state.result_ids().len(), dataset.len())),
            theme.value,
        ),
        Span::styled(format!("| {hints}"), theme.muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
