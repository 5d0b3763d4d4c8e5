//! TUI rendering (impure shell).

pub mod constants;
mod breakdown;
mod city_table;
mod detail;
mod filter_bar;
pub mod format;
mod help;
mod helpers;
mod layout;
mod stats;
mod styles;

pub use filter_bar::FilterBar;
pub use help::render_help_overlay;
pub use layout::render_layout;
pub use stats::StatTiles;
pub use styles::{ColorConfig, Theme};

use crate::config::keybindings::KeyBindings;
use crate::model::{Dataset, KeyAction};
use crate::state::{AppState, SearchEdit};
use chrono::Datelike;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<'d, B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    dataset: &'d Dataset,
    app_state: AppState,
    key_bindings: KeyBindings,
    colors: ColorConfig,
    /// Year city ages are measured against.
    reference_year: i32,
}

impl<'d> TuiApp<'d, CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        dataset: &'d Dataset,
        app_state: AppState,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            dataset,
            app_state,
            key_bindings: KeyBindings::default(),
            colors,
            reference_year: chrono::Local::now().year(),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws only after input or a
    /// resize, so an idle dashboard costs nothing.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<'_, B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing a search.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.search().is_editing() && self.handle_search_key(key) {
            return false;
        }

        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => true,
            Some(action) => {
                let dataset = self.dataset;
                self.update(|state| state.transition(action, dataset));
                debug!(?action, "Key action applied");
                false
            }
            None => false,
        }
    }

    /// Route a key to the search box. Returns false for keys the box does
    /// not consume, which then fall through to the bindings.
    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        let dataset = self.dataset;
        let edit = match key.code {
            KeyCode::Esc => {
                self.update(|state| state.cancel_search(dataset));
                return true;
            }
            KeyCode::Enter => {
                self.update(AppState::submit_search);
                return true;
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                SearchEdit::Insert(ch)
            }
            KeyCode::Backspace => SearchEdit::Backspace,
            KeyCode::Delete => SearchEdit::Delete,
            KeyCode::Left => SearchEdit::CursorLeft,
            KeyCode::Right => SearchEdit::CursorRight,
            KeyCode::Home => SearchEdit::CursorHome,
            KeyCode::End => SearchEdit::CursorEnd,
            _ => return false,
        };
        self.update(|state| state.edit_search(edit, dataset));
        true
    }

    /// Replace the state with the result of a transition.
    fn update(&mut self, transition: impl FnOnce(AppState) -> AppState) {
        let state = std::mem::take(&mut self.app_state);
        self.app_state = transition(state);
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let theme = Theme::new(self.app_state.dark_mode, self.colors);
        let state = &self.app_state;
        let dataset = self.dataset;
        let reference_year = self.reference_year;
        self.terminal.draw(|frame| {
            render_layout(frame, state, dataset, &theme, reference_year);
        })?;
        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(dataset: &Dataset, app_state: AppState, colors: ColorConfig) -> Result<(), TuiError> {
    info!(
        cities = dataset.len(),
        matches = app_state.result_ids().len(),
        "Starting dashboard"
    );
    let mut app = TuiApp::new(dataset, app_state, colors)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    info!(
        recomputations = app.app_state.recomputations(),
        "Dashboard closed"
    );
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// ===== Test Helpers =====

#[cfg(test)]
impl<'d, B> TuiApp<'d, B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        dataset: &'d Dataset,
        app_state: AppState,
    ) -> Self {
        Self {
            terminal,
            dataset,
            app_state,
            key_bindings: KeyBindings::default(),
            colors: ColorConfig::enabled(),
            reference_year: 2024,
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
