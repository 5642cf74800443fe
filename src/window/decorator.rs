use std::fmt;

use ratatui::style::{Color, Modifier, Style};

use super::ManagedWindow;
use crate::layout::floating::header_handle;
use crate::layout::{Point, Rect};
use crate::ui::UiFrame;

/// What a click on a window's chrome does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    Close,
    Drag,
    None,
}

pub trait WindowDecorator: fmt::Debug {
    /// Draws `window` at `screen`, its rect in frame coordinates.
    fn render_window(&self, frame: &mut UiFrame<'_>, screen: Rect, window: &ManagedWindow);

    /// Classifies `point`, in the same coordinates as the window's rect,
    /// against the window's chrome.
    fn hit_test(&self, window: &ManagedWindow, point: Point) -> HeaderAction;
}

/// Single-line border with a header row inside the top edge and a close
/// button on its right.
#[derive(Debug, Default)]
pub struct OpenStepDecorator;

const CLOSE_LABEL: &str = "[x]";

fn close_button(rect: Rect) -> Option<Rect> {
    // border + button + one cell of header on the left
    if rect.width < 6 || rect.height < 3 {
        return None;
    }
    Some(Rect::new(rect.end_x() - 4, rect.y + 1, 3, 1))
}

impl OpenStepDecorator {
    fn interior_style(window: &ManagedWindow) -> (&'static str, Style) {
        if window.is_walkable() {
            ("·", Style::default().fg(Color::Green))
        } else if window.is_passable() {
            ("░", Style::default().fg(Color::DarkGray))
        } else {
            ("▒", Style::default().fg(Color::DarkGray))
        }
    }

    fn border_style(window: &ManagedWindow) -> Style {
        if window.is_unblockable() {
            Style::default().fg(Color::Magenta)
        } else if window.is_focused() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }
}

impl WindowDecorator for OpenStepDecorator {
    fn render_window(&self, frame: &mut UiFrame<'_>, screen: Rect, window: &ManagedWindow) {
        if screen.width < 2 || screen.height < 2 {
            return;
        }
        let left = screen.x;
        let top = screen.y;
        let right = screen.end_x() - 1;
        let bottom = screen.end_y() - 1;
        let header_y = top + 1;
        let border = Self::border_style(window);
        let header_style = if window.is_focused() {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        };

        // Interior
        let (fill, fill_style) = Self::interior_style(window);
        for y in header_y + 1..bottom {
            for x in left + 1..right {
                frame.put(x, y, fill, fill_style);
            }
        }

        // Header background, title and close button
        if header_y < bottom {
            for x in left + 1..right {
                frame.put(x, header_y, " ", header_style);
            }
            let header_width = (right - left - 1).max(0) as usize;
            let title: String = window.title().chars().take(header_width).collect();
            let title_len = title.chars().count() as i32;
            let start_x = left + 1 + (header_width as i32 - title_len) / 2;
            frame.put_str(start_x, header_y, &title, header_style);
            if let Some(button) = close_button(screen) {
                frame.put_str(button.x, button.y, CLOSE_LABEL, header_style);
            }
        }

        // Borders
        for x in left..=right {
            let (top_symbol, bottom_symbol) = if x == left {
                ("┌", "└")
            } else if x == right {
                ("┐", "┘")
            } else {
                ("─", "─")
            };
            frame.put(x, top, top_symbol, border);
            frame.put(x, bottom, bottom_symbol, border);
        }
        for y in top + 1..bottom {
            frame.put(left, y, "│", border);
            frame.put(right, y, "│", border);
        }

        if window.has(super::BehaviorKind::WindowInfo) {
            let rect = window.rect();
            let lines = [
                format!("id {}", window.id().raw()),
                format!("pos {},{}", rect.x, rect.y),
                format!("size {}x{}", rect.width, rect.height),
            ];
            let style = Style::default().fg(Color::Yellow);
            let width = (right - left - 1).max(0) as usize;
            for (row, line) in lines.iter().enumerate() {
                let y = header_y + 1 + row as i32;
                if y >= bottom {
                    break;
                }
                let line: String = line.chars().take(width).collect();
                frame.put_str(left + 1, y, &line, style);
            }
        }
    }

    fn hit_test(&self, window: &ManagedWindow, point: Point) -> HeaderAction {
        let rect = window.rect();
        if close_button(rect).is_some_and(|button| button.contains(point)) {
            return HeaderAction::Close;
        }
        if header_handle(window.id(), rect).is_some_and(|header| header.rect.contains(point)) {
            return HeaderAction::Drag;
        }
        HeaderAction::None
    }
}
