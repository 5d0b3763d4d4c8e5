//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides vim-style defaults alongside arrow keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut kb = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;
        let shift = KeyModifiers::SHIFT;

        // List navigation
        kb.bind(KeyCode::Char('j'), none, KeyAction::SelectNext);
        kb.bind(KeyCode::Char('k'), none, KeyAction::SelectPrev);
        kb.bind(KeyCode::Down, none, KeyAction::SelectNext);
        kb.bind(KeyCode::Up, none, KeyAction::SelectPrev);
        kb.bind(KeyCode::Char('g'), none, KeyAction::SelectFirst);
        kb.bind(KeyCode::Char('G'), shift, KeyAction::SelectLast);
        kb.bind(KeyCode::Home, none, KeyAction::SelectFirst);
        kb.bind(KeyCode::End, none, KeyAction::SelectLast);

        // Search
        kb.bind(KeyCode::Char('/'), none, KeyAction::StartSearch);
        kb.bind(KeyCode::Char('f'), KeyModifiers::CONTROL, KeyAction::StartSearch);

        // Filters
        kb.bind(KeyCode::Char('s'), none, KeyAction::NextStateFilter);
        kb.bind(KeyCode::Char('S'), shift, KeyAction::PrevStateFilter);
        kb.bind(KeyCode::Char('r'), none, KeyAction::NextRegionFilter);
        kb.bind(KeyCode::Char('R'), shift, KeyAction::PrevRegionFilter);
        kb.bind(KeyCode::Char('c'), none, KeyAction::ClearFilters);

        // Sorting
        kb.bind(KeyCode::Char('o'), none, KeyAction::CycleSortKey);
        kb.bind(KeyCode::Char('d'), none, KeyAction::ToggleSortDirection);

        // Detail view
        kb.bind(KeyCode::Enter, none, KeyAction::OpenDetail);
        kb.bind(KeyCode::Esc, none, KeyAction::Close);

        // Application
        kb.bind(KeyCode::Char('t'), none, KeyAction::ToggleTheme);
        kb.bind(KeyCode::Char('?'), none, KeyAction::Help);
        kb.bind(KeyCode::Char('?'), shift, KeyAction::Help);
        kb.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        kb.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        kb
    }
}
