use chrono::Utc;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::formatters::format_relative_time;
use crate::presentation::view_models::ListSelectorViewModel;

const KEY_HELP: [(&str, &str); 5] = [
    ("↑↓", "lista"),
    ("PgUp/PgDn", "rolar"),
    ("o", "abrir"),
    ("r", "recarregar"),
    ("q", "sair"),
];

/// One-line footer: key help on the left, user and freshness on the right.
pub struct StatusBarView<'a> {
    model: &'a ListSelectorViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a ListSelectorViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut help = Vec::new();
        for (key, action) in KEY_HELP {
            help.push(Span::styled(
                key,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            help.push(Span::raw(format!(" {}  ", action)));
        }

        let mut info = Vec::new();
        if !self.model.header.user_label.is_empty() {
            info.push(self.model.header.user_label.clone());
        }
        if let Some(at) = self.model.fetched_at {
            info.push(format!("atualizado {}", format_relative_time(at, Utc::now())));
        }
        let info = info.join(" · ");

        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(info.chars().count() as u16),
        ])
        .areas(area);

        Paragraph::new(Line::from(help)).render(left, buf);
        Paragraph::new(Span::styled(info, Style::default().add_modifier(Modifier::DIM)))
            .render(right, buf);
    }
}
