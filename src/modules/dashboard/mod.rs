//! Dashboard module - market overview shown at `/`

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑ ",
            Trend::Down => "↓ ",
        }
    }

    fn color(&self) -> Color {
        match self {
            Trend::Up => Color::Green,
            Trend::Down => Color::Red,
        }
    }
}

/// One statistic card
#[derive(Debug, Clone, PartialEq)]
pub struct Statistic {
    pub title: &'static str,
    pub value: f64,
    pub precision: usize,
    pub trend: Option<Trend>,
    pub suffix: &'static str,
}

impl Statistic {
    /// Value formatted with the card's precision and thousands separators
    pub fn display_value(&self) -> String {
        let formatted = format!("{:.*}", self.precision, self.value.abs());
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((int_part, frac)) => (int_part, Some(frac)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::new();
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if self.value < 0.0 {
            grouped.insert(0, '-');
        }
        if let Some(frac) = frac_part {
            grouped.push('.');
            grouped.push_str(frac);
        }
        grouped
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub heading: &'static str,
    pub stats: Vec<Statistic>,
    pub notice_title: &'static str,
    pub notice: String,
}

impl Dashboard {
    pub fn new(title: &str) -> Self {
        Self {
            heading: "市场概览",
            stats: vec![
                Statistic {
                    title: "总资产 (USD)",
                    value: 112_893.00,
                    precision: 2,
                    trend: Some(Trend::Up),
                    suffix: "",
                },
                Statistic {
                    title: "今日收益",
                    value: 9.3,
                    precision: 2,
                    trend: Some(Trend::Down),
                    suffix: "%",
                },
                Statistic {
                    title: "AI 分析信号",
                    value: 5.0,
                    precision: 0,
                    trend: None,
                    suffix: " / 10 (积极)",
                },
            ],
            notice_title: "系统公告",
            notice: format!("欢迎使用 {title} 智能投研系统。"),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // heading
                Constraint::Length(5), // cards
                Constraint::Min(0),    // notice
            ])
            .split(area);

        let heading = Paragraph::new(Line::from(Span::styled(
            self.heading,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(heading, chunks[0]);

        let constraints: Vec<Constraint> = self
            .stats
            .iter()
            .map(|_| Constraint::Ratio(1, self.stats.len().max(1) as u32))
            .collect();
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(chunks[1]);
        for (stat, card) in self.stats.iter().zip(cards.iter()) {
            render_statistic(frame, *card, stat);
        }

        let notice = Paragraph::new(self.notice.as_str())
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(self.notice_title),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(notice, chunks[2]);
    }
}

fn render_statistic(frame: &mut Frame, area: Rect, stat: &Statistic) {
    let value_style = match stat.trend {
        Some(trend) => Style::default().fg(trend.color()),
        None => Style::default().fg(Color::White),
    };

    let mut spans = Vec::new();
    if let Some(trend) = stat.trend {
        spans.push(Span::styled(trend.arrow(), value_style));
    }
    spans.push(Span::styled(
        stat.display_value(),
        value_style.add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(stat.suffix, Style::default().fg(Color::DarkGray)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(stat.title);

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}
