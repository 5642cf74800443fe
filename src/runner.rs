use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::actions::Action;
use crate::cli::GameConfig;
use crate::debug_log::{DebugLogHandle, global_debug_log};
use crate::drivers::keyboard::HeldKeys;
use crate::drivers::{InputDriver, OutputDriver};
use crate::error::WindowError;
use crate::event_loop::{ControlFlow, EventLoop, LoopEvent};
use crate::game::{GameEvent, GameSession};
use crate::host::{HostSurface, NullHost};
use crate::keybindings::KeyBindings;
use crate::layout::Point;
use crate::layout::floating::resize_edge_at;
use crate::levels;
use crate::state::AppState;
use crate::ui::{self, UiFrame, Viewport};
use crate::window::decorator::{HeaderAction, OpenStepDecorator, WindowDecorator};

/// Builds the session the terminal host plays: built-in levels, CLI windows
/// appended, the requested level loaded.
pub fn build_session(config: &GameConfig) -> Result<GameSession, WindowError> {
    let mut session = GameSession::new(levels::builtin())?;
    session.player_mut().set_speed(config.speed);
    session.set_extra_windows(config.windows.clone());
    session.load_level(config.start_level)?;
    Ok(session)
}

/// Terminal front end around a [`GameSession`].
pub struct GameApp<H: HostSurface = NullHost> {
    session: GameSession<H>,
    state: AppState,
    keybindings: KeyBindings,
    decorator: Box<dyn WindowDecorator>,
    held: HeldKeys,
    viewport: Viewport,
    debug_log: Option<DebugLogHandle>,
}

impl<H: HostSurface> GameApp<H> {
    pub fn new(session: GameSession<H>, config: &GameConfig) -> Self {
        let mut state = AppState::new();
        if let Some(index) = session.current_level() {
            state.set_message(format!("Level {}", index + 1));
        }
        Self {
            session,
            state,
            keybindings: KeyBindings::standard(),
            decorator: Box::new(OpenStepDecorator),
            held: HeldKeys::new(config.key_hold),
            viewport: Viewport::default(),
            debug_log: global_debug_log(),
        }
    }

    pub fn session(&self) -> &GameSession<H> {
        &self.session
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Last viewport used to draw, for mapping pointer cells onto the world.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) -> ControlFlow {
        match event {
            Event::Key(key) => self.handle_key(key, now),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                ControlFlow::Continue
            }
            Event::FocusLost => {
                self.held.release_all();
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> ControlFlow {
        let Some(action) = self.keybindings.action_for_key(key) else {
            return ControlFlow::Continue;
        };
        if let Some(direction) = action.direction() {
            self.held.observe(direction, key.kind, now);
            return ControlFlow::Continue;
        }
        if key.kind != KeyEventKind::Press {
            return ControlFlow::Continue;
        }
        match action {
            Action::Quit => return ControlFlow::Quit,
            Action::FocusNext => {
                self.session.registry_mut().focus_next();
            }
            Action::CloseWindow => {
                if let Some(id) = self.session.registry().focused()
                    && let Err(err) = self.session.registry_mut().on_close_requested(id)
                {
                    tracing::warn!(window_id = ?id, error = %err, "close failed");
                }
            }
            Action::Restart => match self.session.restart_level() {
                Ok(()) => {
                    self.held.release_all();
                    self.state.set_message("Restarted");
                }
                Err(err) => self.state.set_message(err.to_string()),
            },
            Action::ToggleHelp => self.state.toggle_help_visible(),
            Action::ToggleDebugLog => self.state.toggle_debug_log_visible(),
            Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {}
        }
        ControlFlow::Continue
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        let world = self
            .viewport
            .to_world(Point::new(i32::from(mouse.column), i32::from(mouse.row)));
        let result = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.pointer_down(world),
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.session.registry().active_drag().is_some() {
                    self.session.registry_mut().drag_to(world).map(|_| ())
                } else {
                    Ok(())
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.session.registry_mut().end_drag();
                Ok(())
            }
            _ => Ok(()),
        };
        if let Err(err) = result {
            tracing::warn!(error = %err, "pointer gesture failed");
        }
    }

    fn pointer_down(&mut self, world: Point) -> Result<(), WindowError> {
        let registry = self.session.registry_mut();
        let Some(id) = registry.window_at(world) else {
            return Ok(());
        };
        registry.on_focused(id)?;
        let Some(window) = registry.window(id) else {
            return Ok(());
        };
        let rect = window.rect();
        match self.decorator.hit_test(window, world) {
            HeaderAction::Close => {
                registry.on_close_requested(id)?;
            }
            HeaderAction::Drag => {
                registry.begin_move(id, world)?;
            }
            HeaderAction::None => {
                if let Some(edge) = resize_edge_at(id, rect, world) {
                    registry.begin_resize(id, edge, world)?;
                }
            }
        }
        Ok(())
    }

    /// Advances the simulation and turns game events into status messages.
    pub fn tick(&mut self, input_time: Instant, elapsed: Duration) {
        let input = self.held.input(input_time);
        for event in self.session.tick(input, elapsed) {
            match event {
                GameEvent::LevelCompleted(index) => {
                    self.held.release_all();
                    self.state.set_message(format!("Level {} complete", index + 1));
                }
                GameEvent::LevelLoaded(index) => {
                    self.state.set_message(format!("Level {}", index + 1));
                }
                GameEvent::GameOver => {
                    self.state
                        .set_message("You made it! Press r to replay or q to quit");
                }
            }
        }
    }

    pub fn draw(&mut self, mut frame: UiFrame<'_>) {
        self.viewport = ui::render_scene(
            &mut frame,
            &self.session,
            &self.state,
            self.decorator.as_ref(),
            &self.keybindings,
            self.debug_log.as_ref(),
        );
    }
}

/// Plays `app` until the player quits. The output driver must already be
/// entered.
pub fn run_app<H, D, O>(
    app: &mut GameApp<H>,
    input: D,
    output: &mut O,
    config: &GameConfig,
) -> io::Result<()>
where
    H: HostSurface,
    D: InputDriver,
    O: OutputDriver,
{
    let mut event_loop = EventLoop::new(input, config.tick);
    output.draw(|frame| app.draw(frame))?;
    event_loop.run(|_, event| match event {
        LoopEvent::Input(event) => Ok(app.handle_event(&event, Instant::now())),
        LoopEvent::Tick(elapsed) => {
            app.tick(Instant::now(), elapsed);
            output.draw(|frame| app.draw(frame))?;
            Ok(ControlFlow::Continue)
        }
    })
}
