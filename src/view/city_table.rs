//! City table with row selection, or the "No cities found" state.

use super::constants::NAME_COLUMN_WIDTH;
use super::format::{format_decimal, format_thousands, truncate_to_width};
use super::styles::Theme;
use crate::model::CityRecord;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const HEADERS: [&str; 8] = [
    "#",
    "City",
    "State",
    "Region",
    "Population",
    "Area km²",
    "Literacy",
    "Density",
];

/// Render the visible cities as a table, highlighting `selected`.
pub fn render_city_table(
    frame: &mut Frame,
    area: Rect,
    records: &[&CityRecord],
    selected: Option<usize>,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .title(" Cities ");

    if records.is_empty() {
        render_empty(frame, area, block, theme);
        return;
    }

    let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h))).style(theme.header);
    let rows = records.iter().map(|city| city_row(city));
    let widths = [
        Constraint::Length(3),
        Constraint::Length(NAME_COLUMN_WIDTH),
        Constraint::Min(10),
        Constraint::Length(10),
        Constraint::Length(11),
        Constraint::Length(9),
        Constraint::Length(8),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.selected)
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn city_row(city: &CityRecord) -> Row<'static> {
    Row::new(vec![
        Cell::from(city.id.to_string()),
        Cell::from(truncate_to_width(&city.name, NAME_COLUMN_WIDTH as usize)),
        Cell::from(city.state.clone()),
        Cell::from(city.region.to_string()),
        Cell::from(Line::from(format_thousands(city.total_population)).alignment(Alignment::Right)),
        Cell::from(Line::from(format_decimal(city.area, 1)).alignment(Alignment::Right)),
        Cell::from(Line::from(format!("{:.1}%", city.literacy_rate)).alignment(Alignment::Right)),
        Cell::from(
            Line::from(format_thousands(city.population_density.round() as u64))
                .alignment(Alignment::Right),
        ),
    ])
}

fn render_empty(frame: &mut Frame, area: Rect, block: Block<'_>, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::styled("No cities found", theme.value),
        Line::styled("Try a different search or press c to clear filters", theme.muted),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
