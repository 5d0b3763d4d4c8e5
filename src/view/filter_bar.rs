//! Filter bar: search box plus the active state, region and sort.

use super::styles::Theme;
use crate::model::Query;
use crate::state::SearchInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Filter bar widget.
///
/// While the search box is being edited it shows a block cursor; otherwise
/// the term is shown plainly, or a hint when empty.
pub struct FilterBar<'a> {
    query: &'a Query,
    search: &'a SearchInput,
    theme: &'a Theme,
}

impl<'a> FilterBar<'a> {
    /// Bar for the given query and search box.
    pub fn new(query: &'a Query, search: &'a SearchInput, theme: &'a Theme) -> Self {
        Self {
            query,
            search,
            theme,
        }
    }

    fn search_spans(&self) -> Vec<Span<'static>> {
        let text = self.search.text();
        if !self.search.is_editing() {
            return if text.is_empty() {
                vec![Span::styled("press / to search", self.theme.muted)]
            } else {
                vec![Span::styled(text.to_string(), self.theme.value)]
            };
        }

        // Split around the cursor so it can be drawn as a reversed cell.
        let cursor = self.search.cursor();
        let before: String = text.chars().take(cursor).collect();
        let mut after = text.chars().skip(cursor);
        let under = after.next().map_or_else(|| " ".to_string(), String::from);
        let rest: String = after.collect();

        vec![
            Span::styled(before, self.theme.value),
            Span::styled(under, self.theme.value.add_modifier(Modifier::REVERSED)),
            Span::styled(rest, self.theme.value),
        ]
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled("Search: ", self.theme.title)];
        spans.extend(self.search_spans());
        spans.extend([
            Span::styled("   State: ", self.theme.title),
            Span::styled(
                self.query.active_state_filter().unwrap_or("All").to_string(),
                self.theme.value,
            ),
            Span::styled("   Region: ", self.theme.title),
            Span::styled(
                self.query.active_region_filter().unwrap_or("All").to_string(),
                self.theme.value,
            ),
            Span::styled("   Sort: ", self.theme.title),
            Span::styled(
                format!(
                    "{} {}",
                    self.query.sort_key.label(),
                    self.query.sort_direction.arrow()
                ),
                self.theme.value,
            ),
        ]);

        let border_style = if self.search.is_editing() {
            self.theme.header
        } else {
            self.theme.border
        };

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(" Filters "),
            )
            .render(area, buf);
    }
}
