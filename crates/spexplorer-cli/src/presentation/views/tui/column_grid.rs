use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget},
};

use crate::presentation::formatters::grid::{card_width, grid_columns};
use crate::presentation::formatters::{truncate, wrap_chars};
use crate::presentation::view_models::ColumnCardViewModel;
use crate::presentation::views::labels;

use super::role_color;

const GAP: u16 = 1;
const INTERNAL_NAME_PREFIX: &str = "InternalName: ";

/// Responsive card grid; `scroll` counts whole grid rows.
pub struct ColumnGridView<'a> {
    cards: &'a [ColumnCardViewModel],
    scroll: usize,
}

impl<'a> ColumnGridView<'a> {
    pub fn new(cards: &'a [ColumnCardViewModel], scroll: usize) -> Self {
        Self { cards, scroll }
    }

    /// Number of grid rows the cards occupy at `width`.
    pub fn row_count(card_count: usize, width: u16) -> usize {
        card_count.div_ceil(grid_columns(width as usize))
    }
}

fn card_lines(card: &ColumnCardViewModel, inner: usize) -> Vec<Line<'static>> {
    let mut badges = vec![Span::styled(
        format!(" {} ", card.role.label()),
        Style::default()
            .fg(Color::Black)
            .bg(role_color(card.role)),
    )];
    if card.required {
        badges.push(Span::raw(" "));
        badges.push(Span::styled(
            format!(" {} ", labels::REQUIRED_BADGE),
            Style::default().fg(Color::White).bg(Color::Red),
        ));
    }

    let mut lines = vec![
        Line::from(badges),
        Line::from(Span::styled(
            truncate(&card.display_name, inner),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let name_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let prefix_len = INTERNAL_NAME_PREFIX.chars().count();
    let chunks = wrap_chars(&format!("{}{}", INTERNAL_NAME_PREFIX, card.internal_name), inner);
    for (idx, chunk) in chunks.into_iter().enumerate() {
        if idx == 0 {
            let split = chunk
                .char_indices()
                .nth(prefix_len)
                .map(|(pos, _)| pos)
                .unwrap_or(chunk.len());
            let (label, name) = chunk.split_at(split);
            lines.push(Line::from(vec![
                Span::styled(label.to_string(), Style::default().add_modifier(Modifier::DIM)),
                Span::styled(name.to_string(), name_style),
            ]));
        } else {
            lines.push(Line::from(Span::styled(chunk, name_style)));
        }
    }

    lines.push(Line::from(vec![
        Span::styled("Tipo: ", Style::default().add_modifier(Modifier::DIM)),
        Span::raw(card.column_type.label()),
    ]));

    lines
}

impl<'a> Widget for ColumnGridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let columns = grid_columns(area.width as usize);
        let width = card_width(area.width as usize, columns, GAP as usize) as u16;
        // Borders and horizontal padding
        let inner = width.saturating_sub(4).max(1) as usize;

        let mut y = area.y;
        for row in self.cards.chunks(columns).skip(self.scroll) {
            if y >= area.bottom() {
                break;
            }

            let contents: Vec<Vec<Line>> = row.iter().map(|card| card_lines(card, inner)).collect();
            let row_height = contents.iter().map(|l| l.len()).max().unwrap_or(0) as u16 + 2;
            let visible_height = row_height.min(area.bottom() - y);

            let mut x = area.x;
            for lines in contents {
                let card_area = Rect::new(x, y, width, visible_height).intersection(area);
                Paragraph::new(lines)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::DarkGray))
                            .padding(Padding::horizontal(1)),
                    )
                    .render(card_area, buf);
                x = x.saturating_add(width + GAP);
            }

            y = y.saturating_add(row_height);
        }
    }
}
