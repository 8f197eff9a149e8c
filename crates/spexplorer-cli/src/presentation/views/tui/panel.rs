use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::{
    ColumnCardViewModel, ColumnPanelViewModel, ListHeaderViewModel,
};
use crate::presentation::views::labels;
use spexplorer_types::FailureReason;

use super::ColumnGridView;

/// Column Viewer detail panel in one of its render states.
pub struct ColumnPanelWidget<'a> {
    model: &'a ColumnPanelViewModel,
    scroll: usize,
}

impl<'a> ColumnPanelWidget<'a> {
    pub fn new(model: &'a ColumnPanelViewModel, scroll: usize) -> Self {
        Self { model, scroll }
    }

    /// Height of the list header inside the panel border.
    pub const HEADER_HEIGHT: u16 = 3;

    /// Area left for the card grid once the border, header and footer are drawn.
    pub fn grid_area(area: Rect) -> Rect {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let [_, grid, _] = Self::split(inner);
        grid
    }

    fn split(inner: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(Self::HEADER_HEIGHT + 1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner)
    }

    fn render_placeholder(area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(Span::styled(
            labels::PLACEHOLDER,
            Style::default().add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center)
        .render(middle, buf);
    }

    fn render_error(
        list: &ListHeaderViewModel,
        reason: &FailureReason,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(labels::ICON_ERROR, Style::default().fg(Color::Red))),
            Line::from(""),
            Line::from(Span::styled(
                labels::LIST_ERROR_TITLE,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(labels::list_error_body(&list.display_name)),
            Line::from(""),
            Line::from(Span::styled(
                labels::failure_detail(reason),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        // Height after wrapping, so the reason line survives narrow panels
        let height = u16::try_from(paragraph.line_count(inner.width))
            .unwrap_or(u16::MAX)
            .min(inner.height);

        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(inner);

        paragraph.render(middle, buf);
    }

    fn render_columns(
        list: &ListHeaderViewModel,
        cards: &[ColumnCardViewModel],
        scroll: usize,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let [header_area, grid_area, footer_area] = Self::split(inner);

        let mut header = vec![
            Line::from(Span::styled(
                list.display_name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("ID: {}", list.id),
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        if list.web_url.is_some() {
            header.push(Line::from(vec![
                Span::styled(
                    format!("{} ↗", labels::OPEN_LINK),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                Span::styled(" (o)", Style::default().add_modifier(Modifier::DIM)),
            ]));
        }
        Paragraph::new(header)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(header_area, buf);

        if cards.is_empty() {
            Paragraph::new(Span::styled(
                labels::EMPTY_COLUMNS,
                Style::default().add_modifier(Modifier::DIM),
            ))
            .render(grid_area, buf);
        } else {
            ColumnGridView::new(cards, scroll).render(grid_area, buf);
        }

        Paragraph::new(Span::styled(
            labels::FOOTER_TIP,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
        ))
        .render(footer_area, buf);
    }
}

impl<'a> Widget for ColumnPanelWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.model {
            ColumnPanelViewModel::Placeholder => Self::render_placeholder(area, buf),
            ColumnPanelViewModel::ListError { list, reason } => {
                Self::render_error(list, reason, area, buf)
            }
            ColumnPanelViewModel::Columns { list, cards } => {
                Self::render_columns(list, cards, self.scroll, area, buf)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::views::tui::test_support::{buffer_text, render_to_buffer};
    use spexplorer_types::{ColumnRole, ColumnType};

    fn tasks_header() -> ListHeaderViewModel {
        ListHeaderViewModel {
            display_name: "Tasks".to_string(),
            id: "1".to_string(),
            web_url: Some("https://x/tasks".to_string()),
        }
    }

    #[test]
    fn test_placeholder_when_nothing_selected() {
        let vm = ColumnPanelViewModel::Placeholder;
        let text = buffer_text(&render_to_buffer(ColumnPanelWidget::new(&vm, 0), 70, 12));
        assert!(text.contains("Selecione uma lista"));
        assert!(!text.contains("InternalName"));
    }

    #[test]
    fn test_error_panel_replaces_grid() {
        let vm = ColumnPanelViewModel::ListError {
            list: ListHeaderViewModel {
                display_name: "Risks".to_string(),
                id: "2".to_string(),
                web_url: None,
            },
            reason: FailureReason::AccessDenied,
        };
        let text = buffer_text(&render_to_buffer(ColumnPanelWidget::new(&vm, 0), 90, 20));

        assert!(text.contains("Acesso Negado ou Lista Inexistente"));
        assert!(text.contains("Risks"));
        assert!(text.contains("Motivo: acesso negado"));
        assert!(!text.contains("InternalName"));
        assert!(!text.contains("DICA"));
    }

    #[test]
    fn test_error_panel_keeps_reason_when_narrow() {
        let vm = ColumnPanelViewModel::ListError {
            list: ListHeaderViewModel {
                display_name: "Registro de Riscos".to_string(),
                id: "2".to_string(),
                web_url: None,
            },
            reason: FailureReason::AccessDenied,
        };
        let text = buffer_text(&render_to_buffer(ColumnPanelWidget::new(&vm, 0), 36, 24));

        assert!(text.contains("Motivo: acesso negado"), "reason clipped:\n{}", text);
        assert!(text.contains("leitura."));
    }

    #[test]
    fn test_columns_panel_header_cards_and_tip() {
        let vm = ColumnPanelViewModel::Columns {
            list: tasks_header(),
            cards: vec![ColumnCardViewModel {
                id: "c1".to_string(),
                internal_name: "Title".to_string(),
                display_name: "Title".to_string(),
                role: ColumnRole::Primary,
                required: true,
                read_only: false,
                column_type: ColumnType::Text,
            }],
        };
        let text = buffer_text(&render_to_buffer(ColumnPanelWidget::new(&vm, 0), 90, 20));

        assert!(text.contains("Tasks"));
        assert!(text.contains("ID: 1"));
        assert!(text.contains("Ver no SharePoint"));
        assert!(text.contains("Primária"));
        assert!(text.contains("Obrigatória"));
        assert!(text.contains("InternalName: Title"));
        assert!(text.contains("Tipo: Texto"));
        assert!(text.contains("DICA: Use o InternalName"));
    }

    #[test]
    fn test_zero_columns_shows_header_without_error() {
        let vm = ColumnPanelViewModel::Columns {
            list: tasks_header(),
            cards: Vec::new(),
        };
        let text = buffer_text(&render_to_buffer(ColumnPanelWidget::new(&vm, 0), 90, 12));

        assert!(text.contains("Tasks"));
        assert!(text.contains("Esta lista não possui colunas."));
        assert!(!text.contains("Acesso Negado"));
    }

    #[test]
    fn test_grid_area_excludes_header_and_footer() {
        let area = Rect::new(0, 0, 90, 20);
        let grid = ColumnPanelWidget::grid_area(area);
        assert_eq!(grid.width, 88);
        assert_eq!(grid.height, 20 - 2 - 4 - 1);
    }
}
