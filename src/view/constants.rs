//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header bar in lines.
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the stat tile row in lines (border + title, value, subtitle).
pub const STAT_TILES_HEIGHT: u16 = 5;

/// Height of the filter bar in lines (border + content).
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for the result count and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage of the city table; the breakdown chart takes the rest.
pub const TABLE_WIDTH_PERCENT: u16 = 62;

/// Widest a city name is drawn in the table before truncation.
pub const NAME_COLUMN_WIDTH: u16 = 16;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the city detail modal.
pub const DETAIL_POPUP_WIDTH_PERCENT: u16 = 84;

/// Height percentage for the city detail modal.
pub const DETAIL_POPUP_HEIGHT_PERCENT: u16 = 90;

/// Columns used by the text bars in the detail modal.
pub const DETAIL_BAR_WIDTH: usize = 20;
