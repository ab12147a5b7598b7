//! Content modules
//!
//! The content region shows one view chosen from the current location:
//! - dashboard: market overview at `/`
//! - a "coming soon" placeholder for any other menu route
//! - a not-found notice for locations no menu node points at

pub mod dashboard;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::menu::{route, MenuTree};
use dashboard::Dashboard;

#[derive(Debug, Clone, PartialEq)]
pub enum ContentView {
    Dashboard(Dashboard),
    ComingSoon { label: String },
    NotFound { location: String },
}

impl ContentView {
    pub fn for_location(tree: &MenuTree, location: &str, title: &str) -> Self {
        let location = route::normalize(location);
        if location == "/" {
            return ContentView::Dashboard(Dashboard::new(title));
        }
        match tree.nodes_at(&location).first() {
            Some(id) => ContentView::ComingSoon {
                label: tree.get(*id).label.clone(),
            },
            None => ContentView::NotFound { location },
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            ContentView::Dashboard(dashboard) => dashboard.render(frame, area),
            ContentView::ComingSoon { label } => {
                let text = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(format!("{label} (Coming Soon)")),
                ])
                .alignment(Alignment::Center);
                frame.render_widget(text, area);
            }
            ContentView::NotFound { location } => {
                let text = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(format!("No page at {location}")),
                ])
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
                frame.render_widget(text, area);
            }
        }
    }
}
