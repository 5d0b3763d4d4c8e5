//! Domain-level keyboard actions independent of key bindings.

/// User intents the dashboard understands.
///
/// These represent what the user wants, not which key they pressed. The
/// mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // List navigation
    /// Move the list selection up one row. Default: k/↑
    SelectPrev,
    /// Move the list selection down one row. Default: j/↓
    SelectNext,
    /// Jump to the first row. Default: g/Home
    SelectFirst,
    /// Jump to the last row. Default: G/End
    SelectLast,

    // Search
    /// Start editing the search term. Default: //Ctrl+f
    StartSearch,

    // Filters
    /// Cycle the state filter forward through distinct states. Default: s
    NextStateFilter,
    /// Cycle the state filter backward. Default: S
    PrevStateFilter,
    /// Cycle the region filter forward through distinct regions. Default: r
    NextRegionFilter,
    /// Cycle the region filter backward. Default: R
    PrevRegionFilter,
    /// Clear search text and both filters. Default: c
    ClearFilters,

    // Sorting
    /// Cycle through the sort keys. Default: o
    CycleSortKey,
    /// Flip ascending/descending. Default: d
    ToggleSortDirection,

    // Detail view
    /// Open the detail view for the selected city. Default: Enter
    OpenDetail,
    /// Close the detail view, help, or cancel search. Default: Esc
    Close,

    // Application
    /// Switch between light and dark palettes. Default: t
    ToggleTheme,
    /// Show the keyboard shortcuts overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
