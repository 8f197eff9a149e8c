use super::text::pad_right;

/// Width used when stdout is not attached to a terminal.
pub const DEFAULT_TERMINAL_WIDTH: usize = 100;

/// Narrowest width the console card grid will lay out for.
const MIN_LAYOUT_WIDTH: usize = 40;

/// Number of card columns for the available width (md / xl breakpoints).
pub fn grid_columns(width: usize) -> usize {
    if width < 80 {
        1
    } else if width < 120 {
        2
    } else {
        3
    }
}

pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
        .max(MIN_LAYOUT_WIDTH)
}

/// Width of one card when `total` cells are split into `columns` with `gap` between them.
pub fn card_width(total: usize, columns: usize, gap: usize) -> usize {
    let columns = columns.max(1);
    let gaps = gap * (columns - 1);
    total.saturating_sub(gaps) / columns
}

/// Space between two cards on the same row.
pub const CARD_GAP: usize = 2;

/// Draws each card's lines in a box of `inner` content width and lays the
/// boxes out `columns` per row. Cards on the same row share a height.
pub fn layout_cards(cards: &[Vec<String>], inner: usize, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let gap = " ".repeat(CARD_GAP);
    let mut out = Vec::new();

    for row in cards.chunks(columns) {
        let height = row.iter().map(|lines| lines.len()).max().unwrap_or(0);
        let boxes: Vec<Vec<String>> = row.iter().map(|lines| boxed(lines, inner, height)).collect();

        for line_idx in 0..height + 2 {
            let line: Vec<&str> = boxes.iter().map(|b| b[line_idx].as_str()).collect();
            out.push(line.join(&gap).trim_end().to_string());
        }
    }

    out
}

fn boxed(lines: &[String], inner: usize, height: usize) -> Vec<String> {
    let rule = "─".repeat(inner + 2);
    let mut out = Vec::with_capacity(height + 2);
    out.push(format!("┌{}┐", rule));
    for idx in 0..height {
        let content = lines.get(idx).map(String::as_str).unwrap_or("");
        out.push(format!("│ {} │", pad_right(content, inner)));
    }
    out.push(format!("└{}┘", rule));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_breakpoints() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(79), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(119), 2);
        assert_eq!(grid_columns(120), 3);
        assert_eq!(grid_columns(300), 3);
    }

    #[test]
    fn test_card_width_accounts_for_gaps() {
        assert_eq!(card_width(100, 2, 2), 49);
        assert_eq!(card_width(120, 3, 2), 38);
        assert_eq!(card_width(60, 1, 2), 60);
        assert_eq!(card_width(1, 3, 2), 0);
    }

    #[test]
    fn test_layout_cards_aligns_rows() {
        let cards = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
            vec!["d".to_string()],
        ];
        let lines = layout_cards(&cards, 3, 2);

        assert_eq!(
            lines,
            [
                "┌─────┐  ┌─────┐",
                "│ a   │  │ c   │",
                "│ b   │  │     │",
                "└─────┘  └─────┘",
                "┌─────┐",
                "│ d   │",
                "└─────┘",
            ]
        );
    }
}
