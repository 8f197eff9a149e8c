use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::PageHeaderViewModel;
use crate::presentation::views::labels;

/// Page header: title, subtitle and the environment tag.
pub struct HeaderView<'a> {
    model: &'a PageHeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a PageHeaderViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let environment = labels::environment(&self.model.environment);
        let env_width = environment.chars().count() as u16 + 2;
        let [text_area, env_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(env_width)]).areas(inner);

        let lines = vec![
            Line::from(Span::styled(
                labels::PAGE_TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                labels::PAGE_SUBTITLE,
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        Paragraph::new(lines).render(text_area, buf);

        Paragraph::new(Line::from(Span::styled(
            environment,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Right)
        .render(env_area, buf);
    }
}
