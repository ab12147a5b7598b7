use chrono::Datelike;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use ratatui::Frame;

pub mod layout;
pub mod sider;

use crate::app::{App, ShellView};
use crate::core::Router;
use crate::modules::ContentView;

pub fn draw<R: Router>(f: &mut Frame, app: &App<R>) {
    let view = app.view();
    let areas = layout::areas(f.size(), view.panel);

    sider::draw_sider(f, &areas, &view);
    draw_header(f, areas.header, &view);
    draw_breadcrumb(f, areas.breadcrumb, &view);
    draw_content(f, areas.content, &app.content());
    draw_footer(f, areas.footer, &view);
}

fn draw_header(f: &mut Frame, area: Rect, view: &ShellView) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled("Route ", Style::default().fg(Color::DarkGray)),
        Span::styled(view.location.clone(), Style::default().fg(Color::Cyan)),
    ]);
    let hints = Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::raw(" move  "),
        Span::styled("⏎", Style::default().fg(Color::Yellow)),
        Span::raw(" open  "),
        Span::styled("[", Style::default().fg(Color::Yellow)),
        Span::raw(" sider  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit "),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    f.render_widget(Paragraph::new(title).block(block.clone()), chunks[0]);
    f.render_widget(
        Paragraph::new(hints).alignment(Alignment::Right).block(block),
        chunks[1],
    );
}

fn draw_breadcrumb(f: &mut Frame, area: Rect, view: &ShellView) {
    let trail = view.trail();
    let last = trail.len() - 1;

    let mut spans = vec![Span::raw("  ")];
    for (i, label) in trail.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" / ", Style::default().fg(Color::DarkGray)));
        }
        let style = if i == last {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label.to_string(), style));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_content(f: &mut Frame, area: Rect, content: &ContentView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);
    content.render(f, inner);
}

fn draw_footer(f: &mut Frame, area: Rect, view: &ShellView) {
    let footer = footer_text(&view.title, &view.footer, chrono::Local::now().year());
    let paragraph = Paragraph::new(footer)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

pub fn footer_text(title: &str, footer: &str, year: i32) -> String {
    if footer.is_empty() {
        format!("{title} ©{year}")
    } else {
        format!("{title} ©{year} {footer}")
    }
}
