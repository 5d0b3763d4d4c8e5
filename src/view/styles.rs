//! Light and dark palettes for the dashboard.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of the environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Theme =====

/// Resolved styles for every dashboard element.
///
/// With colors disabled every style is plain except the selected row,
/// which falls back to reverse video so the selection stays visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Screen background and default text.
    pub base: Style,
    /// Table header row.
    pub header: Style,
    /// Block borders.
    pub border: Style,
    /// Block titles and labels.
    pub title: Style,
    /// Figures and bar values.
    pub value: Style,
    /// Secondary text and placeholders.
    pub muted: Style,
    /// Key names in hints and help.
    pub key: Style,
    /// Selected table row.
    pub selected: Style,
    /// Chart bars.
    pub bar: Style,
    /// Bar of the selected city.
    pub bar_highlight: Style,
    /// Male population bars.
    pub male: Style,
    /// Female population bars.
    pub female: Style,
    /// Values above a baseline.
    pub positive: Style,
    /// Values below a baseline.
    pub negative: Style,
}

impl Theme {
    /// Palette for the given mode.
    pub fn new(dark_mode: bool, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::plain();
        }
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    fn light() -> Self {
        Self {
            base: Style::default().fg(Color::Black).bg(Color::White),
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
            title: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            key: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::White).bg(Color::Blue),
            bar: Style::default().fg(Color::Blue),
            bar_highlight: Style::default().fg(Color::Magenta),
            male: Style::default().fg(Color::Blue),
            female: Style::default().fg(Color::Magenta),
            positive: Style::default().fg(Color::Green),
            negative: Style::default().fg(Color::Red),
        }
    }

    fn dark() -> Self {
        Self {
            base: Style::default().fg(Color::Gray).bg(Color::Black),
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            title: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            key: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            bar: Style::default().fg(Color::Cyan),
            bar_highlight: Style::default().fg(Color::Yellow),
            male: Style::default().fg(Color::LightBlue),
            female: Style::default().fg(Color::LightMagenta),
            positive: Style::default().fg(Color::LightGreen),
            negative: Style::default().fg(Color::LightRed),
        }
    }

    fn plain() -> Self {
        let none = Style::default();
        Self {
            base: none,
            header: none.add_modifier(Modifier::BOLD),
            border: none,
            title: none,
            value: none.add_modifier(Modifier::BOLD),
            muted: none,
            key: none.add_modifier(Modifier::BOLD),
            selected: none.add_modifier(Modifier::REVERSED),
            bar: none,
            bar_highlight: none.add_modifier(Modifier::BOLD),
            male: none,
            female: none,
            positive: none,
            negative: none,
        }
    }

    /// Style for a signed figure such as a literacy gap.
    pub fn signed(&self, value: f64) -> Style {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }
}

// ===== Tests =====
