//! Configurable key bindings for widgets.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One or more key combinations that trigger the same widget action.
#[derive(Debug, Clone)]
pub struct Binding {
    pub keys: Vec<KeyCombination>,
    /// Short description of the action, for help text.
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

/// A key code plus the modifiers that must be held with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Binding {
    pub fn new(key: KeyCombination, description: impl Into<String>) -> Self {
        Self::with_keys(vec![key], description)
    }

    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `event` matches any of the combinations.
    ///
    /// Extra modifiers on the event are tolerated, so a binding for `G`
    /// also matches `Shift+G`.
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

impl KeyCombination {
    pub fn new(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::SHIFT)
    }

    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn matches_any_listed_key() {
        let b = Binding::with_keys(
            vec![
                KeyCombination::new(KeyCode::Up),
                KeyCombination::new(KeyCode::Char('k')),
            ],
            "Up",
        );
        assert!(b.matches(&press(KeyCode::Up, KeyModifiers::NONE)));
        assert!(b.matches(&press(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!b.matches(&press(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn required_modifier_must_be_held() {
        let b = Binding::new(KeyCombination::ctrl(KeyCode::Char('a')), "All");
        assert!(!b.matches(&press(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert!(b.matches(&press(KeyCode::Char('a'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn disabled_never_matches() {
        let b = Binding::new(KeyCombination::new(KeyCode::Enter), "Confirm").enabled(false);
        assert!(!b.matches(&press(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
