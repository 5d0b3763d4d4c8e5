//! Small rendering helpers shared by the widgets.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
};

/// An empty line, used as a spacer in paragraphs.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// "Label: value" with the label styled separately.
pub fn key_value_line(label: &str, value: String, label_style: Style, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), label_style),
        Span::styled(value, value_style),
    ])
}

/// Horizontal bar of `width` cells, `ratio` of them filled.
///
/// `ratio` is clamped to `0.0..=1.0`.
pub fn text_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Calculate a rect centered in `area` with the given percentages of its
/// width and height.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}
