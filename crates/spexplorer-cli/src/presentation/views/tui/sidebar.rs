use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::presentation::view_models::{ListRowStatus, ListRowViewModel, ListSelectorViewModel};
use crate::presentation::views::labels;

/// List Selector sidebar. Each list takes two lines: name, then status.
pub struct SidebarView<'a> {
    model: &'a ListSelectorViewModel,
}

impl<'a> SidebarView<'a> {
    pub fn new(model: &'a ListSelectorViewModel) -> Self {
        Self { model }
    }

    fn row_item(row: &'a ListRowViewModel) -> ListItem<'a> {
        let (icon_color, status_color) = match row.status {
            ListRowStatus::Ready { .. } => (Color::Green, Color::Gray),
            ListRowStatus::Error { .. } => (Color::Red, Color::Red),
        };

        let name_style = if row.selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        ListItem::new(vec![
            Line::from(vec![
                Span::styled(labels::row_icon(&row.status), Style::default().fg(icon_color)),
                Span::raw(" "),
                Span::styled(row.display_name.as_str(), name_style),
            ]),
            Line::from(Span::styled(
                format!("  {}", labels::row_status(&row.status)),
                Style::default().fg(status_color),
            )),
        ])
    }
}

impl<'a> Widget for SidebarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(labels::SIDEBAR_TITLE)
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .borders(Borders::ALL);

        if self.model.rows.is_empty() {
            Paragraph::new(Span::styled(
                labels::EMPTY_LISTS,
                Style::default().add_modifier(Modifier::DIM),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self.model.rows.iter().map(Self::row_item).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▌");

        // Offset starts at zero each frame; ratatui scrolls until the selection is visible
        let mut state = ListState::default().with_selected(self.model.selected_index());
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::PageHeaderViewModel;
    use crate::presentation::views::tui::test_support::{buffer_text, render_to_buffer};
    use spexplorer_types::FailureReason;

    fn model(rows: Vec<ListRowViewModel>) -> ListSelectorViewModel {
        ListSelectorViewModel {
            header: PageHeaderViewModel {
                environment: "PRODUÇÃO CCO".to_string(),
                user_label: String::new(),
                source: "fixture".to_string(),
            },
            rows,
            fetched_at: None,
        }
    }

    fn row(name: &str, id: &str, status: ListRowStatus, selected: bool) -> ListRowViewModel {
        ListRowViewModel {
            id: id.to_string(),
            display_name: name.to_string(),
            status,
            selected,
        }
    }

    #[test]
    fn test_sidebar_rows_show_status_lines() {
        let vm = model(vec![
            row("Tasks", "1", ListRowStatus::Ready { column_count: 1 }, true),
            row(
                "Risks",
                "2",
                ListRowStatus::Error {
                    reason: FailureReason::AccessDenied,
                },
                false,
            ),
        ]);
        let text = buffer_text(&render_to_buffer(SidebarView::new(&vm), 30, 8));

        assert!(text.contains("Listas Identificadas"));
        assert!(text.contains("Tasks"));
        assert!(text.contains("1 Colunas"));
        assert!(text.contains("Risks"));
        assert!(text.contains("Erro de Conexão"));

        let tasks_line = text.lines().position(|l| l.contains("Tasks"));
        let risks_line = text.lines().position(|l| l.contains("Risks"));
        assert!(tasks_line < risks_line, "rows keep loader order");
    }

    #[test]
    fn test_sidebar_scrolls_to_keep_selection_visible() {
        let rows = (0..10)
            .map(|i| {
                row(
                    &format!("Lista {}", i),
                    &i.to_string(),
                    ListRowStatus::Ready { column_count: i },
                    i == 9,
                )
            })
            .collect();
        let vm = model(rows);
        let text = buffer_text(&render_to_buffer(SidebarView::new(&vm), 30, 6));

        assert!(text.contains("Lista 9"));
        assert!(!text.contains("Lista 0"));
    }

    #[test]
    fn test_sidebar_empty_state() {
        let vm = model(Vec::new());
        let text = buffer_text(&render_to_buffer(SidebarView::new(&vm), 30, 5));
        assert!(text.contains("Nenhuma lista disponível."));
    }
}
