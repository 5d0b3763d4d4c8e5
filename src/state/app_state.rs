//! Application state and transitions.
//!
//! AppState is the root state type containing all dashboard UI state.
//! Every transition consumes the old value and returns a new one, so the
//! shell only ever swaps in a whole state.

use crate::engine::{QueryCache, Summary, DEFAULT_COMPARISON_COUNT};
use crate::model::{CityRecord, Dataset, KeyAction, Query};
use crate::state::filter_cycle::{next_option, prev_option};
use crate::state::search_input::{SearchEdit, SearchInput};

// ===== Overlay =====

/// What is drawn on top of the main dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    /// Only the dashboard.
    #[default]
    None,
    /// Detail modal for the city with this id.
    Detail(u32),
    /// Keyboard shortcuts.
    Help,
}

// ===== AppState =====

/// Dashboard state. Pure data, no side effects.
///
/// # State Machine
///
/// - **Query**: search text, state filter, region filter, sort key and
///   direction. Any change re-runs the pipeline through the cache.
/// - **Search box**: editing or not. While editing, printable keys go to
///   the box instead of the key bindings.
/// - **Selection**: a row of the current result. Follows the selected
///   city across query changes when it is still visible.
/// - **Overlay**: none, the detail modal for one city, or help.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    query: Query,
    search: SearchInput,
    results: QueryCache,
    selected: usize,
    /// Current overlay.
    pub overlay: Overlay,
    /// Dark palette when `true`.
    pub dark_mode: bool,
    /// How many cities the comparison chart shows.
    pub comparison_count: usize,
    states: Vec<String>,
    regions: Vec<String>,
}

impl AppState {
    /// Initial state for `query` over `dataset`.
    ///
    /// The filter options are taken from the dataset once, here.
    pub fn new(dataset: &Dataset, query: Query) -> Self {
        let mut results = QueryCache::new();
        results.refresh(dataset, &query);
        Self {
            search: SearchInput::with_text(query.search_term.clone()),
            query,
            results,
            selected: 0,
            overlay: Overlay::None,
            dark_mode: false,
            comparison_count: DEFAULT_COMPARISON_COUNT,
            states: dataset.distinct_states(),
            regions: dataset.distinct_regions(),
        }
    }

    /// Builder-style theme selection.
    pub fn with_dark_mode(mut self, dark_mode: bool) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    /// Builder-style comparison size.
    pub fn with_comparison_count(mut self, count: usize) -> Self {
        self.comparison_count = count;
        self
    }

    // ===== Accessors =====

    /// Query the results were computed from.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The search box.
    pub fn search(&self) -> &SearchInput {
        &self.search
    }

    /// Aggregate of the visible cities.
    pub fn summary(&self) -> &Summary {
        self.results.summary()
    }

    /// Ids of the visible cities, in display order.
    pub fn result_ids(&self) -> &[u32] {
        self.results.ids()
    }

    /// Visible cities, in display order.
    pub fn results<'a>(&self, dataset: &'a Dataset) -> Vec<&'a CityRecord> {
        self.results.records(dataset)
    }

    /// How many times the pipeline ran since startup.
    pub fn recomputations(&self) -> usize {
        self.results.recomputations()
    }

    /// States the state filter cycles through.
    pub fn state_options(&self) -> &[String] {
        &self.states
    }

    /// Regions the region filter cycles through.
    pub fn region_options(&self) -> &[String] {
        &self.regions
    }

    /// Selected row index, or `None` when nothing is visible.
    pub fn selected_index(&self) -> Option<usize> {
        (!self.results.is_empty()).then_some(self.selected)
    }

    /// Id of the selected city.
    pub fn selected_id(&self) -> Option<u32> {
        self.results.ids().get(self.selected).copied()
    }

    /// City shown in the detail modal, if it is open.
    pub fn detail_city<'a>(&self, dataset: &'a Dataset) -> Option<&'a CityRecord> {
        match self.overlay {
            Overlay::Detail(id) => dataset.get(id),
            _ => None,
        }
    }

    /// True while the help overlay is open.
    pub fn help_visible(&self) -> bool {
        self.overlay == Overlay::Help
    }

    // ===== Transitions =====

    /// Apply a bound key action.
    ///
    /// `Quit` is left to the shell and returns the state unchanged.
    pub fn transition(self, action: KeyAction, dataset: &Dataset) -> Self {
        // Help swallows everything but its own toggles.
        if self.overlay == Overlay::Help {
            return match action {
                KeyAction::Help | KeyAction::Close => Self {
                    overlay: Overlay::None,
                    ..self
                },
                _ => self,
            };
        }

        match action {
            KeyAction::SelectPrev => self.move_selection(-1),
            KeyAction::SelectNext => self.move_selection(1),
            KeyAction::SelectFirst => self.select(0),
            KeyAction::SelectLast => {
                let last = self.results.len().saturating_sub(1);
                self.select(last)
            }
            KeyAction::StartSearch => Self {
                search: self.search.activate(),
                overlay: Overlay::None,
                ..self
            },
            KeyAction::NextStateFilter => {
                let next = next_option(self.query.active_state_filter(), &self.states);
                self.update_query(dataset, |q| q.state_filter = next)
            }
            KeyAction::PrevStateFilter => {
                let prev = prev_option(self.query.active_state_filter(), &self.states);
                self.update_query(dataset, |q| q.state_filter = prev)
            }
            KeyAction::NextRegionFilter => {
                let next = next_option(self.query.active_region_filter(), &self.regions);
                self.update_query(dataset, |q| q.region_filter = next)
            }
            KeyAction::PrevRegionFilter => {
                let prev = prev_option(self.query.active_region_filter(), &self.regions);
                self.update_query(dataset, |q| q.region_filter = prev)
            }
            KeyAction::ClearFilters => {
                let cleared = Self {
                    search: SearchInput::default(),
                    ..self
                };
                cleared.update_query(dataset, |q| {
                    q.search_term.clear();
                    q.state_filter = None;
                    q.region_filter = None;
                })
            }
            KeyAction::CycleSortKey => {
                let next = self.query.sort_key.next();
                self.update_query(dataset, |q| q.sort_key = next)
            }
            KeyAction::ToggleSortDirection => {
                let toggled = self.query.sort_direction.toggle();
                self.update_query(dataset, |q| q.sort_direction = toggled)
            }
            KeyAction::OpenDetail => match self.selected_id() {
                Some(id) => Self {
                    overlay: Overlay::Detail(id),
                    ..self
                },
                None => self,
            },
            KeyAction::Close => Self {
                overlay: Overlay::None,
                ..self
            },
            KeyAction::ToggleTheme => Self {
                dark_mode: !self.dark_mode,
                ..self
            },
            KeyAction::Help => Self {
                overlay: Overlay::Help,
                ..self
            },
            KeyAction::Quit => self,
        }
    }

    /// Apply an edit to the search box and re-run the query.
    pub fn edit_search(self, edit: SearchEdit, dataset: &Dataset) -> Self {
        let search = self.search.apply(edit);
        let term = search.text().to_string();
        Self { search, ..self }.update_query(dataset, |q| q.search_term = term)
    }

    /// Leave the search box, keeping the typed term.
    pub fn submit_search(self) -> Self {
        Self {
            search: self.search.submit(),
            ..self
        }
    }

    /// Leave the search box and clear the term.
    pub fn cancel_search(self, dataset: &Dataset) -> Self {
        Self {
            search: self.search.cancel(),
            ..self
        }
        .update_query(dataset, |q| q.search_term.clear())
    }

    // ===== Helpers =====

    /// Mutate a copy of the query, refresh results, keep the selection on
    /// the same city when it survives the change.
    fn update_query(mut self, dataset: &Dataset, change: impl FnOnce(&mut Query)) -> Self {
        let previous = self.selected_id();
        change(&mut self.query);
        if !self.results.refresh(dataset, &self.query) {
            return self;
        }
        self.selected = previous
            .and_then(|id| self.results.ids().iter().position(|&r| r == id))
            .unwrap_or(0);
        if let Overlay::Detail(id) = self.overlay {
            if !self.results.ids().contains(&id) {
                self.overlay = Overlay::None;
            }
        }
        self
    }

    fn move_selection(self, delta: isize) -> Self {
        let target = self.selected.saturating_add_signed(delta);
        self.select(target)
    }

    /// Select a row, clamped to the result. The detail modal follows.
    fn select(mut self, index: usize) -> Self {
        let max = self.results.len().saturating_sub(1);
        self.selected = index.min(max);
        if let (Overlay::Detail(_), Some(id)) = (self.overlay, self.selected_id()) {
            self.overlay = Overlay::Detail(id);
        }
        self
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
