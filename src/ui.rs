//! Terminal rendering of a game session.
//!
//! `UiFrame` wraps `ratatui::Frame` and clips every draw call to the visible
//! area. Windows and the player live on a signed world grid, so most drawing
//! goes through [`UiFrame::put`], which silently drops cells outside the
//! frame instead of panicking in the buffer.
use indoc::indoc;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as TuiRect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use crate::debug_log::DebugLogHandle;
use crate::game::GameSession;
use crate::host::HostSurface;
use crate::keybindings::KeyBindings;
use crate::layout::{Point, Rect};
use crate::state::AppState;
use crate::window::decorator::WindowDecorator;

pub struct UiFrame<'a> {
    area: TuiRect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer, for offscreen
    /// rendering.
    pub fn from_parts(area: TuiRect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> TuiRect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: TuiRect) -> Option<TuiRect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: TuiRect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Writes one cell at a signed position. Cells outside the frame are
    /// dropped.
    pub fn put(&mut self, x: i32, y: i32, symbol: &str, style: Style) {
        let x0 = i32::from(self.area.x);
        let y0 = i32::from(self.area.y);
        if x < x0
            || y < y0
            || x >= x0 + i32::from(self.area.width)
            || y >= y0 + i32::from(self.area.height)
        {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((x as u16, y as u16)) {
            cell.set_symbol(symbol).set_style(style);
        }
    }

    /// Writes `text` one cell per char starting at a signed position.
    pub fn put_str(&mut self, x: i32, y: i32, text: &str, style: Style) {
        let mut encoded = [0u8; 4];
        for (offset, ch) in text.chars().enumerate() {
            self.put(x + offset as i32, y, ch.encode_utf8(&mut encoded), style);
        }
    }
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// Maps the world grid onto the terminal: the level boundary is centered in
/// the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Screen position of world (0, 0).
    origin: Point,
}

impl Viewport {
    pub fn fit(boundary: Rect, area: TuiRect) -> Self {
        let free_x = i32::from(area.width) - boundary.width;
        let free_y = i32::from(area.height) - boundary.height;
        Self {
            origin: Point::new(
                i32::from(area.x) + free_x / 2 - boundary.x,
                i32::from(area.y) + free_y / 2 - boundary.y,
            ),
        }
    }

    pub fn to_screen(&self, rect: Rect) -> Rect {
        rect.translate(self.origin)
    }

    pub fn to_world(&self, screen: Point) -> Point {
        self.origin.delta_to(screen)
    }
}

/// Play area: everything except the status line.
pub fn play_area(area: TuiRect) -> TuiRect {
    TuiRect {
        height: area.height.saturating_sub(1),
        ..area
    }
}

const HELP_INTRO: &str = indoc! {"
    Reach the yellow diamond.

    You can only stand inside dotted (walkable) windows.
    Drag windows by their title bar and resize them by
    their edges. Solid windows push each other apart.
"};

/// Draws the whole scene and returns the viewport used, so pointer
/// positions can be mapped back onto the world.
pub fn render_scene<H: HostSurface>(
    frame: &mut UiFrame<'_>,
    session: &GameSession<H>,
    state: &AppState,
    decorator: &dyn WindowDecorator,
    keybindings: &KeyBindings,
    debug_log: Option<&DebugLogHandle>,
) -> Viewport {
    let full = frame.area();
    let area = play_area(full);
    let boundary = session.boundary();
    let viewport = Viewport::fit(boundary, area);

    // Board
    let board = viewport.to_screen(boundary);
    let board_style = Style::default().fg(Color::Black).bg(Color::Reset);
    for y in board.y..board.end_y() {
        for x in board.x..board.end_x() {
            frame.put(x, y, "█", board_style);
        }
    }

    // Windows, bottom of the stack first
    for window in session.registry().windows() {
        decorator.render_window(frame, viewport.to_screen(window.rect()), window);
    }

    if let Some(goal) = session.goal() {
        let goal = viewport.to_screen(goal);
        let style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        for y in goal.y..goal.end_y() {
            for x in goal.x..goal.end_x() {
                frame.put(x, y, "◆", style);
            }
        }
    }

    let player = viewport.to_screen(session.player().rect().to_grid());
    let player_style = Style::default().fg(Color::Cyan);
    for y in player.y..player.end_y() {
        for x in player.x..player.end_x() {
            frame.put(x, y, "█", player_style);
        }
    }

    render_status(frame, session, state, full);

    if state.help_visible() {
        render_help(frame, keybindings, area);
    }
    if state.debug_log_visible() {
        render_debug_log(frame, debug_log, area);
    }
    viewport
}

fn render_status<H: HostSurface>(
    frame: &mut UiFrame<'_>,
    session: &GameSession<H>,
    state: &AppState,
    full: TuiRect,
) {
    if full.height == 0 {
        return;
    }
    let y = full.y + full.height - 1;
    let level = match session.current_level() {
        Some(index) => format!(" Level {}/{} ", index + 1, session.levels().len()),
        None => " - ".to_string(),
    };
    let anchor = session
        .player()
        .anchor()
        .and_then(|id| session.registry().window(id))
        .map(|window| window.title().to_string())
        .unwrap_or_else(|| "nowhere".to_string());
    let mut spans = vec![
        Span::styled(
            level,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" on {anchor} ")),
    ];
    if let Some(message) = state.message() {
        spans.push(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Green),
        ));
    }
    spans.push(Span::styled(
        " ? help  q quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        TuiRect::new(full.x, y, full.width, 1),
    );
}

fn centered(area: TuiRect, width: u16, height: u16) -> TuiRect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    TuiRect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_help(frame: &mut UiFrame<'_>, keybindings: &KeyBindings, area: TuiRect) {
    let mut lines: Vec<Line> = HELP_INTRO.lines().map(Line::from).collect();
    let key_style = Style::default().fg(Color::Cyan);
    for (action, keys) in keybindings.help_entries() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<18}", keys.join(", ")), key_style),
            Span::raw(action.to_string()),
        ]));
    }
    let height = lines.len() as u16 + 2;
    let rect = centered(area, 56, height);
    frame.render_widget(Clear, rect);
    let block = Block::default().title(" Help ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

fn render_debug_log(frame: &mut UiFrame<'_>, log: Option<&DebugLogHandle>, area: TuiRect) {
    let height = (area.height / 3).max(3).min(area.height);
    let rect = TuiRect::new(area.x, area.y + area.height - height, area.width, height);
    let rows = height.saturating_sub(2) as usize;
    let width = rect.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = match log {
        Some(log) => log
            .tail(rows)
            .into_iter()
            .map(|line| Line::from(truncate_to_width(&line, width)))
            .collect(),
        None => vec![Line::from("debug log unavailable")],
    };
    frame.render_widget(Clear, rect);
    let block = Block::default().title(" Debug log ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
