//! Side menu rendering

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::layout::UiAreas;
use crate::app::ShellView;
use crate::core::{MenuRow, PanelState};
use crate::menu::NodeKind;

pub fn draw_sider(f: &mut Frame, areas: &UiAreas, view: &ShellView) {
    let frame = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(frame, areas.sider);

    draw_logo(f, areas.sider_logo, view);
    draw_menu(f, areas.sider_menu, view);
    draw_trigger(f, areas.sider_trigger, view.panel);
}

fn draw_logo(f: &mut Frame, area: Rect, view: &ShellView) {
    let text = match view.panel {
        PanelState::Expanded => view.title.clone(),
        PanelState::Collapsed => view.title.chars().take(1).collect(),
    };
    let logo = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(logo, area);
}

fn draw_menu(f: &mut Frame, area: Rect, view: &ShellView) {
    let items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|row| ListItem::new(row_line(row, view.panel)).style(row_style(row)))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    let mut state = ListState::default().with_offset(scroll_offset(view.cursor, area.height));
    if !view.rows.is_empty() {
        state.select(Some(view.cursor));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// First menu row shown in a list area `height` rows tall, keeping the
/// cursor row on screen. Mouse hit testing uses the same offset.
pub fn scroll_offset(cursor: usize, height: u16) -> usize {
    cursor.saturating_sub(usize::from(height.saturating_sub(1)))
}

fn draw_trigger(f: &mut Frame, area: Rect, panel: PanelState) {
    let symbol = match panel {
        PanelState::Expanded => "«",
        PanelState::Collapsed => "»",
    };
    let trigger = Paragraph::new(symbol)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(trigger, area);
}

/// Text of one menu row
pub fn row_line(row: &MenuRow, panel: PanelState) -> Line<'static> {
    let icon = row.icon.map(|icon| icon.glyph()).unwrap_or(" ");

    if panel.is_collapsed() {
        let mark = if row.icon.is_some() {
            icon.to_string()
        } else {
            row.label.chars().take(1).collect()
        };
        return Line::from(format!(" {mark}"));
    }

    let mut spans = vec![
        Span::raw("  ".repeat(row.depth)),
        Span::raw(format!(" {icon} ")),
        Span::raw(row.label.clone()),
    ];
    if row.kind != NodeKind::Leaf {
        let marker = if row.open { " ▾" } else { " ▸" };
        spans.push(Span::styled(marker, Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn row_style(row: &MenuRow) -> Style {
    if row.active {
        Style::default()
            .fg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else if row.contains_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Icon, MenuKey};

    fn row(kind: NodeKind, open: bool) -> MenuRow {
        MenuRow {
            key: MenuKey::from("k"),
            label: "资产分析".to_string(),
            icon: Some(Icon::User),
            depth: 1,
            kind,
            open,
            active: false,
            contains_active: false,
        }
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn expanded_rows_indent_and_mark_groups() {
        let line = row_line(&row(NodeKind::Group, false), PanelState::Expanded);
        assert_eq!(text(&line), "   ◉ 资产分析 ▸");

        let line = row_line(&row(NodeKind::Group, true), PanelState::Expanded);
        assert!(text(&line).ends_with('▾'));

        let line = row_line(&row(NodeKind::Leaf, false), PanelState::Expanded);
        assert_eq!(text(&line), "   ◉ 资产分析");
    }

    #[test]
    fn scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(9, 5), 5);
        assert_eq!(scroll_offset(3, 0), 3);
    }

    #[test]
    fn collapsed_rows_show_icon_or_initial() {
        let line = row_line(&row(NodeKind::Leaf, false), PanelState::Collapsed);
        assert_eq!(text(&line), " ◉");

        let mut plain = row(NodeKind::Leaf, false);
        plain.icon = None;
        let line = row_line(&plain, PanelState::Collapsed);
        assert_eq!(text(&line), " 资");
    }
}
