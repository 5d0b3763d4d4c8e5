//! Stat tiles summarizing the visible cities.

use super::format::{format_decimal, format_mean, format_thousands, showing_count};
use super::styles::Theme;
use crate::engine::Summary;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

// ===== StatTiles Widget =====

/// Row of four tiles: total population, total area, average literacy and
/// average density. Each tile repeats the "Showing N of M cities" line.
///
/// Means over an empty subset render as "—".
pub struct StatTiles<'a> {
    summary: &'a Summary,
    total_cities: usize,
    theme: &'a Theme,
}

impl<'a> StatTiles<'a> {
    /// Tiles for `summary` out of `total_cities`.
    pub fn new(summary: &'a Summary, total_cities: usize, theme: &'a Theme) -> Self {
        Self {
            summary,
            total_cities,
            theme,
        }
    }

    /// Title and value for each tile, in display order.
    fn tiles(&self) -> [(&'static str, String); 4] {
        [
            (
                "Total Population",
                format_thousands(self.summary.total_population),
            ),
            (
                "Total Area",
                format!("{} km²", format_decimal(self.summary.total_area, 1)),
            ),
            (
                "Avg Literacy Rate",
                format_mean(self.summary.average_literacy_rate, 1, "%"),
            ),
            (
                "Avg Density",
                format_mean(self.summary.average_density, 0, " /km²"),
            ),
        ]
    }
}

impl Widget for StatTiles<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
        let showing = showing_count(self.summary.count, self.total_cities);

        for ((title, value), chunk) in self.tiles().into_iter().zip(chunks.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border);
            let lines = vec![
                Line::styled(title, self.theme.title),
                Line::styled(value, self.theme.value),
                Line::styled(showing.clone(), self.theme.muted),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block)
                .render(*chunk, buf);
        }
    }
}
