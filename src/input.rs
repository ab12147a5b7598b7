//! Keyboard and mouse input mapping

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::ShellView;
use crate::core::{Action, CursorMove, NavigateTarget};
use crate::ui::layout::{rect_contains, UiAreas};
use crate::ui::sider::scroll_offset;

/// Convert a keyboard event to an Action
pub fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q') | KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Up | KeyCode::Char('k'), _) => Action::Cursor(CursorMove::Up),
        (KeyCode::Down | KeyCode::Char('j'), _) => Action::Cursor(CursorMove::Down),
        (KeyCode::Home | KeyCode::Char('g'), _) => Action::Cursor(CursorMove::First),
        (KeyCode::End | KeyCode::Char('G'), _) => Action::Cursor(CursorMove::Last),
        (KeyCode::Enter | KeyCode::Char(' '), _) => Action::Activate,
        (KeyCode::Right | KeyCode::Char('l'), _) => Action::ExpandGroup,
        (KeyCode::Left | KeyCode::Char('h'), _) => Action::CollapseGroup,
        (KeyCode::Char('[') | KeyCode::Char('c'), _) => Action::ToggleSider,
        (KeyCode::Backspace, _) => Action::Navigate(NavigateTarget::Back),
        _ => Action::None,
    }
}

/// Convert a mouse event to an Action, given the frame it landed on
pub fn mouse_to_action(mouse: MouseEvent, areas: &UiAreas, view: &ShellView) -> Action {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if rect_contains(areas.sider_trigger, col, row) {
                return Action::ToggleSider;
            }
            if !rect_contains(areas.sider_menu, col, row) {
                return Action::None;
            }
            let index = scroll_offset(view.cursor, areas.sider_menu.height)
                + usize::from(row - areas.sider_menu.y);
            view.rows
                .get(index)
                .map(|menu_row| Action::Click(menu_row.key.clone()))
                .unwrap_or(Action::None)
        }
        MouseEventKind::ScrollUp if rect_contains(areas.sider, col, row) => {
            Action::Cursor(CursorMove::Up)
        }
        MouseEventKind::ScrollDown if rect_contains(areas.sider, col, row) => {
            Action::Cursor(CursorMove::Down)
        }
        _ => Action::None,
    }
}
