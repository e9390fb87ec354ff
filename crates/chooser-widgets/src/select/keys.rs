//! Key bindings for the select control and its menu.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key plus the modifiers that must be held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombination {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn alt(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::ALT,
        }
    }
}

/// One menu action and the keys that trigger it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyCombination>,
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

impl Binding {
    pub fn new(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `event` presses one of the keys with at least its modifiers.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled
            && self
                .keys
                .iter()
                .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Every key the select reacts to, grouped by action.
///
/// Typing into the search box is not a binding: any printable character that
/// matches nothing here edits the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectKeyBindings {
    /// Open the menu while the control is focused and closed.
    pub open: Binding,
    pub next: Binding,
    pub prev: Binding,
    /// Select the highlighted option and close.
    pub choose: Binding,
    pub close: Binding,
}

impl Default for SelectKeyBindings {
    fn default() -> Self {
        Self {
            open: Binding::new(
                vec![
                    KeyCombination::new(KeyCode::Char(' ')),
                    KeyCombination::new(KeyCode::Enter),
                    KeyCombination::new(KeyCode::Down),
                    KeyCombination::new(KeyCode::Up),
                ],
                "open menu",
            ),
            next: Binding::new(vec![KeyCombination::new(KeyCode::Down)], "next option"),
            prev: Binding::new(vec![KeyCombination::new(KeyCode::Up)], "previous option"),
            choose: Binding::new(
                vec![
                    KeyCombination::new(KeyCode::Enter),
                    KeyCombination::new(KeyCode::Char(' ')),
                    KeyCombination::new(KeyCode::Tab),
                ],
                "select option",
            ),
            close: Binding::new(vec![KeyCombination::new(KeyCode::Esc)], "close menu"),
        }
    }
}

impl SelectKeyBindings {
    /// All bindings, for help lines.
    pub fn all(&self) -> [&Binding; 5] {
        [&self.open, &self.next, &self.prev, &self.choose, &self.close]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn defaults_cover_menu_keys() {
        let b = SelectKeyBindings::default();
        assert!(b.open.matches(&key(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(b.open.matches(&key(KeyCode::Up, KeyModifiers::NONE)));
        assert!(b.choose.matches(&key(KeyCode::Tab, KeyModifiers::NONE)));
        assert!(b.close.matches(&key(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(!b.close.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn required_modifiers_must_be_held() {
        let b = Binding::new(vec![KeyCombination::ctrl(KeyCode::Char('o'))], "open");
        assert!(b.matches(&key(KeyCode::Char('o'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('o'), KeyModifiers::NONE)));
    }

    #[test]
    fn disabled_never_matches() {
        let b = Binding::new(vec![KeyCombination::new(KeyCode::Tab)], "choose").enabled(false);
        assert!(!b.matches(&key(KeyCode::Tab, KeyModifiers::NONE)));
    }

    #[test]
    fn alt_combination() {
        let b = Binding::new(vec![KeyCombination::alt(KeyCode::Down)], "open");
        assert!(b.matches(&key(KeyCode::Down, KeyModifiers::ALT | KeyModifiers::SHIFT)));
    }
}
