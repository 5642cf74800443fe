use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::player::DirectionInput;

/// Cleans up raw key events before they reach the bindings.
///
/// Release events are kept: held movement keys need them when the terminal
/// reports them.
#[derive(Debug, Default)]
pub struct KeyboardNormalizer;

impl KeyboardNormalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&mut self, evt: Event) -> Option<Event> {
        match evt {
            Event::Key(mut key) => {
                if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
                    key.code = KeyCode::BackTab;
                    key.modifiers.remove(KeyModifiers::SHIFT);
                }
                // uppercase letters arrive with SHIFT; movement ignores case
                if let KeyCode::Char(c) = key.code
                    && c.is_ascii_uppercase()
                {
                    key.code = KeyCode::Char(c.to_ascii_lowercase());
                    key.modifiers.remove(KeyModifiers::SHIFT);
                }
                Some(Event::Key(key))
            }
            other => Some(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Turns key press, repeat and release events into per-tick direction state.
///
/// Most terminals never report releases. Until one is seen, a key counts as
/// held for `hold` after its last press or repeat; afterwards only the
/// release ends it.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    hold: Duration,
    reports_release: bool,
    last_seen: [Option<Instant>; 4],
}

impl HeldKeys {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            reports_release: false,
            last_seen: [None; 4],
        }
    }

    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    pub fn observe(&mut self, direction: Direction, kind: KeyEventKind, now: Instant) {
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.last_seen[direction.index()] = Some(now);
            }
            KeyEventKind::Release => {
                self.reports_release = true;
                self.last_seen[direction.index()] = None;
            }
        }
    }

    pub fn release_all(&mut self) {
        self.last_seen = [None; 4];
    }

    pub fn is_held(&self, direction: Direction, now: Instant) -> bool {
        self.last_seen[direction.index()].is_some_and(|seen| {
            self.reports_release || now.saturating_duration_since(seen) <= self.hold
        })
    }

    pub fn input(&self, now: Instant) -> DirectionInput {
        DirectionInput {
            up: self.is_held(Direction::Up, now),
            down: self.is_held(Direction::Down, now),
            left: self.is_held(Direction::Left, now),
            right: self.is_held(Direction::Right, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn tab_with_shift_becomes_backtab() {
        let mut norm = KeyboardNormalizer::new();
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT);
        let out = norm.normalize(Event::Key(key));
        let Some(Event::Key(k)) = out else {
            panic!("expected key event");
        };
        assert_eq!(k.code, KeyCode::BackTab);
        assert!(!k.modifiers.contains(KeyModifiers::SHIFT));
    }

    #[test]
    fn release_events_are_kept() {
        let mut norm = KeyboardNormalizer::new();
        let mut key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        key.kind = KeyEventKind::Release;
        let Some(Event::Key(k)) = norm.normalize(Event::Key(key)) else {
            panic!("expected key event");
        };
        assert_eq!(k.kind, KeyEventKind::Release);
        assert_eq!(k.code, KeyCode::Char('a'));
        assert_eq!(k.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn non_key_events_pass_through() {
        let mut norm = KeyboardNormalizer::new();
        assert_eq!(
            norm.normalize(Event::Resize(10, 20)),
            Some(Event::Resize(10, 20))
        );
    }

    #[test]
    fn presses_expire_without_release_reports() {
        let t0 = Instant::now();
        let mut keys = HeldKeys::new(Duration::from_millis(100));
        keys.observe(Direction::Right, KeyEventKind::Press, t0);
        assert!(keys.input(t0 + Duration::from_millis(50)).right);
        assert!(!keys.input(t0 + Duration::from_millis(150)).right);
        keys.observe(Direction::Right, KeyEventKind::Repeat, t0 + Duration::from_millis(90));
        assert!(keys.input(t0 + Duration::from_millis(150)).right);
    }

    #[test]
    fn release_reports_switch_to_explicit_mode() {
        let t0 = Instant::now();
        let mut keys = HeldKeys::new(Duration::from_millis(100));
        keys.observe(Direction::Up, KeyEventKind::Press, t0);
        keys.observe(Direction::Left, KeyEventKind::Press, t0);
        keys.observe(Direction::Up, KeyEventKind::Release, t0);
        assert!(keys.reports_release());
        let later = t0 + Duration::from_secs(5);
        let input = keys.input(later);
        assert!(input.left && !input.up);
        keys.release_all();
        assert!(keys.input(later).is_idle());
    }
}
