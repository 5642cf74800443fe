use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use crate::actions::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(MoveUp, KeyCombo::plain(KeyCode::Up));
        kb.add(MoveUp, KeyCombo::plain(KeyCode::Char('w')));
        kb.add(MoveDown, KeyCombo::plain(KeyCode::Down));
        kb.add(MoveDown, KeyCombo::plain(KeyCode::Char('s')));
        kb.add(MoveLeft, KeyCombo::plain(KeyCode::Left));
        kb.add(MoveLeft, KeyCombo::plain(KeyCode::Char('a')));
        kb.add(MoveRight, KeyCombo::plain(KeyCode::Right));
        kb.add(MoveRight, KeyCombo::plain(KeyCode::Char('d')));
        kb.add(FocusNext, KeyCombo::plain(KeyCode::Tab));
        kb.add(CloseWindow, KeyCombo::plain(KeyCode::Char('x')));
        kb.add(Restart, KeyCombo::plain(KeyCode::Char('r')));
        kb.add(ToggleHelp, KeyCombo::plain(KeyCode::Char('?')));
        kb.add(ToggleHelp, KeyCombo::plain(KeyCode::F(1)));
        kb.add(ToggleDebugLog, KeyCombo::plain(KeyCode::F(12)));
        kb.add(Quit, KeyCombo::plain(KeyCode::Char('q')));
        kb.add(Quit, KeyCombo::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        kb
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|c| c.matches(key)))
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| self.matches(*action, key))
    }

    /// Help rows in a stable order.
    pub fn help_entries(&self) -> Vec<(Action, Vec<String>)> {
        Action::ALL
            .into_iter()
            .filter_map(|action| {
                let list = self.map.get(&action)?;
                Some((action, list.iter().map(KeyCombo::display).collect()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::keyboard::Direction;

    #[test]
    fn defaults_match_quit() {
        let kb = KeyBindings::standard();
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(kb.matches(Action::Quit, &ev));
        assert_eq!(kb.action_for_key(&ev), Some(Action::Quit));
    }

    #[test]
    fn arrows_and_wasd_move() {
        let kb = KeyBindings::standard();
        let left = kb
            .action_for_key(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE))
            .and_then(Action::direction);
        assert_eq!(left, Some(Direction::Left));
        let up = kb
            .action_for_key(&KeyEvent::new(KeyCode::Up, KeyModifiers::NONE))
            .and_then(Action::direction);
        assert_eq!(up, Some(Direction::Up));
    }

    #[test]
    fn help_lists_every_bound_action_once() {
        let kb = KeyBindings::standard();
        let entries = kb.help_entries();
        assert_eq!(entries.len(), Action::ALL.len());
        assert_eq!(entries[0].0, Action::MoveUp);
        assert_eq!(entries[0].1, vec!["Up".to_string(), "W".to_string()]);
    }
}
