use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::PanelState;

pub const SIDER_WIDTH: u16 = 24;
pub const SIDER_COLLAPSED_WIDTH: u16 = 6;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub sider: Rect,
    pub sider_logo: Rect,
    pub sider_menu: Rect,
    pub sider_trigger: Rect,
    pub header: Rect,
    pub breadcrumb: Rect,
    pub content: Rect,
    pub footer: Rect,
}

pub fn areas(size: Rect, panel: PanelState) -> UiAreas {
    let sider_width = match panel {
        PanelState::Expanded => SIDER_WIDTH,
        PanelState::Collapsed => SIDER_COLLAPSED_WIDTH,
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sider_width), Constraint::Min(0)])
        .split(size);

    let sider_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(columns[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(columns[1]);

    UiAreas {
        size,
        sider: columns[0],
        sider_logo: sider_chunks[0],
        sider_menu: sider_chunks[1],
        sider_trigger: sider_chunks[2],
        header: main_chunks[0],
        breadcrumb: main_chunks[1],
        content: main_chunks[2],
        footer: main_chunks[3],
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
