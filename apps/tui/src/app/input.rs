use crate::app::state::App;
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

/// Years skipped by PageUp / PageDown.
const PAGE_YEARS: isize = 10;
/// Years skipped per wheel notch.
const WHEEL_YEARS: isize = 3;

pub fn handle_input(app: &mut App, key: KeyCode, area: Rect) {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
        }
        KeyCode::Left | KeyCode::Char('h') => app.scroll_by(-1, area),
        KeyCode::Right | KeyCode::Char('l') => app.scroll_by(1, area),
        KeyCode::PageUp => app.scroll_by(-PAGE_YEARS, area),
        KeyCode::PageDown => app.scroll_by(PAGE_YEARS, area),
        KeyCode::Home => app.scroll_to(0, area),
        KeyCode::End => app.scroll_to(usize::MAX, area),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.hover(mouse.column, mouse.row, area);
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            app.scroll_by(WHEEL_YEARS, area);
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            app.scroll_by(-WHEEL_YEARS, area);
        }
        MouseEventKind::Down(_) | MouseEventKind::Up(_) => {}
    }
}
