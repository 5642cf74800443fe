//! Level progression around the registry and the player.

use std::time::Duration;

use crate::constants::{DEFAULT_PLAYER_SPEED, MAX_TICK_ELAPSED};
use crate::error::WindowError;
use crate::host::{HostSurface, NullHost};
use crate::layout::{Rect, intersects};
use crate::levels::LevelConfig;
use crate::player::{DirectionInput, PlayerController};
use crate::window::{WindowConfig, WindowId, WindowRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Index into the level list.
    LevelLoaded(usize),
    LevelCompleted(usize),
    GameOver,
}

#[derive(Debug)]
pub struct GameSession<H: HostSurface = NullHost> {
    registry: WindowRegistry<H>,
    player: PlayerController,
    levels: Vec<LevelConfig>,
    // appended to every level
    extra_windows: Vec<WindowConfig>,
    current: Option<usize>,
    finished: bool,
}

impl GameSession<NullHost> {
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self, WindowError> {
        Self::with_host(NullHost, levels)
    }
}

impl<H: HostSurface> GameSession<H> {
    pub fn with_host(host: H, levels: Vec<LevelConfig>) -> Result<Self, WindowError> {
        if levels.is_empty() {
            return Err(WindowError::Configuration(
                "at least one level is required".to_string(),
            ));
        }
        let player_size = levels[0].player_size;
        Ok(Self {
            registry: WindowRegistry::with_host(host),
            player: PlayerController::new(DEFAULT_PLAYER_SPEED, player_size),
            levels,
            extra_windows: Vec::new(),
            current: None,
            finished: false,
        })
    }

    pub fn registry(&self) -> &WindowRegistry<H> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WindowRegistry<H> {
        &mut self.registry
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerController {
        &mut self.player
    }

    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    pub fn current_level(&self) -> Option<usize> {
        self.current
    }

    pub fn level(&self) -> Option<&LevelConfig> {
        self.current.and_then(|index| self.levels.get(index))
    }

    pub fn goal(&self) -> Option<Rect> {
        self.level().map(|level| level.goal)
    }

    /// Boundary of the current level, or of the first one before any level
    /// is loaded.
    pub fn boundary(&self) -> Rect {
        self.level()
            .or_else(|| self.levels.first())
            .map(|level| level.boundary)
            .unwrap_or_default()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn set_extra_windows(&mut self, windows: Vec<WindowConfig>) {
        self.extra_windows = windows;
    }

    /// Replaces the registry contents with level `index` and puts the player on
    /// its start window.
    ///
    /// Windows that fail to build are reported and skipped. With several start
    /// windows the last one wins; with none the player starts at the center of
    /// the boundary, unanchored.
    pub fn load_level(&mut self, index: usize) -> Result<(), WindowError> {
        let level = self.levels.get(index).cloned().ok_or_else(|| {
            WindowError::Configuration(format!(
                "level index {index} is out of range (have {})",
                self.levels.len()
            ))
        })?;
        self.registry.clear();

        let mut start: Option<WindowId> = None;
        for config in level.windows.iter().chain(self.extra_windows.iter()) {
            let id = match self.registry.create_window(config) {
                Ok(id) => id,
                Err(err) => {
                    tracing::warn!(title = %config.title, error = %err, "skipping window");
                    continue;
                }
            };
            if !config.start {
                continue;
            }
            if start.is_some() {
                tracing::warn!(level = level.number, "multiple start windows, using the last one");
            }
            start = Some(id);
        }

        match start.and_then(|id| self.registry.window(id)) {
            Some(window) => self.player.reset(window, level.player_size),
            None => {
                tracing::warn!(level = level.number, "level has no start window");
                self.player.set_anchor(None);
                self.player.center_in(level.boundary, level.player_size);
            }
        }
        // creation noise must not feed anchor coupling
        self.registry.take_events();
        self.current = Some(index);
        self.finished = false;
        tracing::debug!(
            level = level.number,
            windows = self.registry.len(),
            "level loaded"
        );
        Ok(())
    }

    /// Loads the level after the current one, or reports game over.
    pub fn load_next_level(&mut self) -> Result<GameEvent, WindowError> {
        let next = self.current.map_or(0, |index| index + 1);
        if next >= self.levels.len() {
            tracing::debug!("no more levels");
            self.finished = true;
            return Ok(GameEvent::GameOver);
        }
        self.load_level(next)?;
        Ok(GameEvent::LevelLoaded(next))
    }

    pub fn restart_level(&mut self) -> Result<(), WindowError> {
        let index = self.current.unwrap_or(0);
        self.load_level(index)
    }

    /// One simulation step.
    ///
    /// Window changes queued since the last tick reach the player first, then
    /// the player moves, then the goal is checked.
    pub fn tick(&mut self, input: DirectionInput, elapsed: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let Some(index) = self.current else {
            return events;
        };
        if self.finished {
            return events;
        }
        let boundary = self.boundary();

        for event in self.registry.take_events() {
            self.player
                .on_window_event(&event, self.registry.windows(), boundary);
        }
        self.player.step(
            input,
            elapsed.min(MAX_TICK_ELAPSED),
            self.registry.windows(),
            boundary,
        );
        self.player.refresh_anchor(self.registry.windows());

        let reached = self
            .goal()
            .is_some_and(|goal| intersects(self.player.rect(), goal.to_f64()));
        if reached {
            tracing::debug!(level = index, "level completed");
            events.push(GameEvent::LevelCompleted(index));
            match self.load_next_level() {
                Ok(event) => events.push(event),
                Err(err) => tracing::warn!(error = %err, "could not load next level"),
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Size;
    use crate::window::BehaviorKind;

    fn tiny_level(number: u32, goal: Rect) -> LevelConfig {
        LevelConfig::new(number, Rect::new(0, 0, 40, 10), goal)
            .with_player_size(Size::new(2.0, 2.0))
            .with_window(
                WindowConfig::new("floor", Rect::new(0, 0, 40, 10))
                    .with_behavior(BehaviorKind::Walkable)
                    .start_window(),
            )
    }

    #[test]
    fn empty_level_list_is_rejected() {
        assert!(matches!(
            GameSession::new(Vec::new()),
            Err(WindowError::Configuration(_))
        ));
    }

    #[test]
    fn out_of_range_level_is_a_configuration_error() {
        let mut session = GameSession::new(vec![tiny_level(1, Rect::new(36, 0, 4, 10))]).unwrap();
        assert!(matches!(
            session.load_level(3),
            Err(WindowError::Configuration(_))
        ));
        assert_eq!(session.current_level(), None);
    }

    #[test]
    fn load_places_player_in_start_window() {
        let mut session = GameSession::new(vec![tiny_level(1, Rect::new(36, 0, 4, 10))]).unwrap();
        session.load_level(0).unwrap();
        assert_eq!(session.player().rect(), Rect::new(19.0, 4.0, 2.0, 2.0));
        let start = session.registry().order().next();
        assert_eq!(session.player().anchor(), start);
    }

    #[test]
    fn last_start_window_wins() {
        let level = tiny_level(1, Rect::new(36, 0, 4, 10)).with_window(
            WindowConfig::new("second", Rect::new(0, 0, 10, 10))
                .with_behavior(BehaviorKind::Walkable)
                .start_window(),
        );
        let mut session = GameSession::new(vec![level]).unwrap();
        session.load_level(0).unwrap();
        assert_eq!(session.player().rect(), Rect::new(4.0, 4.0, 2.0, 2.0));
    }

    #[test]
    fn no_start_window_centers_in_boundary() {
        let level = LevelConfig::new(1, Rect::new(0, 0, 40, 10), Rect::new(36, 0, 4, 10))
            .with_player_size(Size::new(2.0, 2.0));
        let mut session = GameSession::new(vec![level]).unwrap();
        session.load_level(0).unwrap();
        assert_eq!(session.player().rect(), Rect::new(19.0, 4.0, 2.0, 2.0));
        assert_eq!(session.player().anchor(), None);
    }

    #[test]
    fn tick_before_load_does_nothing() {
        let mut session = GameSession::new(vec![tiny_level(1, Rect::new(36, 0, 4, 10))]).unwrap();
        assert!(session.tick(DirectionInput::default(), Duration::from_millis(16)).is_empty());
    }

    #[test]
    fn restart_reloads_current_level() {
        let mut session = GameSession::new(vec![tiny_level(1, Rect::new(36, 0, 4, 10))]).unwrap();
        session.load_level(0).unwrap();
        let first = session.registry().order().next();
        session.restart_level().unwrap();
        let second = session.registry().order().next();
        assert_eq!(session.registry().len(), 1);
        assert_ne!(first, second);
        assert_eq!(session.player().rect(), Rect::new(19.0, 4.0, 2.0, 2.0));
    }
}
