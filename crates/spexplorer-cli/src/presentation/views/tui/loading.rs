use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::views::labels;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Full-screen loading state. `tick` advances the spinner.
pub struct LoadingView {
    tick: usize,
}

impl LoadingView {
    pub fn new(tick: usize) -> Self {
        Self { tick }
    }

    pub fn frame(tick: usize) -> &'static str {
        SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
    }
}

impl Widget for LoadingView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(area);

        let lines = vec![
            Line::from(Span::styled(
                Self::frame(self.tick),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                labels::LOADING_CAPTION,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::test_support::{buffer_text, render_to_buffer};

    #[test]
    fn test_loading_caption_and_spinner() {
        let text = buffer_text(&render_to_buffer(LoadingView::new(0), 60, 10));
        assert!(text.contains("Explorando Estrutura SharePoint..."));
        assert!(text.contains("⠋"));
    }

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(LoadingView::frame(1), "⠙");
        assert_eq!(LoadingView::frame(10), LoadingView::frame(0));
    }
}
