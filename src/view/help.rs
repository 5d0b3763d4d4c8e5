//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with all keyboard shortcuts grouped by category.
//! Triggered by '?' key, dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::{centered_rect, empty_line};
use super::styles::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Shortcut groups: (category, [(keys, description)]).
const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/↓", "Select next city"),
            ("k/↑", "Select previous city"),
            ("g/Home", "First city"),
            ("G/End", "Last city"),
            ("Enter", "Open city details"),
        ],
    ),
    (
        "Search",
        &[
            ("/", "Edit search (name or state)"),
            ("Enter", "Keep search and leave the box"),
            ("Esc", "Clear search and leave the box"),
        ],
    ),
    (
        "Filters & Sorting",
        &[
            ("s / S", "Next / previous state"),
            ("r / R", "Next / previous region"),
            ("c", "Clear search and filters"),
            ("o", "Cycle sort key"),
            ("d", "Toggle ascending / descending"),
        ],
    ),
    (
        "Application",
        &[
            ("t", "Toggle light / dark theme"),
            ("?", "Toggle this help"),
            ("Esc", "Close overlay"),
            ("q/Ctrl+C", "Quit"),
        ],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(theme))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(theme.header)
                .style(theme.base),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint on the bottom border
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        theme.muted.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Build the help content lines grouped by category.
fn build_help_content(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, (category, keys)) in SHORTCUTS.iter().enumerate() {
        if idx > 0 {
            lines.push(empty_line());
        }
        lines.push(Line::styled(*category, theme.header));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), theme.key),
                Span::styled(*desc, theme.value.remove_modifier(Modifier::BOLD)),
            ]));
        }
    }
    lines
}
