use std::fmt;

use crate::presentation::formatters::grid::{self, CARD_GAP, card_width, layout_cards};
use crate::presentation::formatters::{format_relative_time, truncate, wrap_chars};
use crate::presentation::view_models::{
    ColumnCardViewModel, ColumnPanelViewModel, ListHeaderViewModel, ListRowStatus,
    ListSelectorViewModel, ViewMode,
};

use super::labels;

// --------------------------------------------------------
// List Selector View
// --------------------------------------------------------

pub struct ListSelectorView<'a> {
    data: &'a ListSelectorViewModel,
    mode: ViewMode,
}

impl<'a> ListSelectorView<'a> {
    pub fn new(data: &'a ListSelectorViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn marker(selected: bool) -> &'static str {
        if selected { ">" } else { " " }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data.rows {
            writeln!(f, "{}", row.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.rows.is_empty() {
            writeln!(f, "{}", labels::EMPTY_LISTS)?;
            return Ok(());
        }

        for row in &self.data.rows {
            writeln!(
                f,
                "{} {} {} ({})",
                Self::marker(row.selected),
                labels::row_icon(&row.status),
                row.display_name,
                labels::row_status(&row.status)
            )?;
        }
        Ok(())
    }

    fn render_header(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header = &self.data.header;
        writeln!(f, "{} · {}", labels::PAGE_TITLE, labels::environment(&header.environment))?;
        writeln!(f, "{}", labels::PAGE_SUBTITLE)?;
        writeln!(f)?;
        writeln!(f, "{}", labels::SIDEBAR_TITLE)?;
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;

        if self.data.rows.is_empty() {
            writeln!(f, "  {}", labels::EMPTY_LISTS)?;
            return Ok(());
        }

        for row in &self.data.rows {
            writeln!(
                f,
                "{} {} {}",
                Self::marker(row.selected),
                labels::row_icon(&row.status),
                row.display_name
            )?;
            writeln!(f, "      {}", labels::row_status(&row.status))?;
        }
        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_header(f)?;

        if self.data.rows.is_empty() {
            writeln!(f, "  {}", labels::EMPTY_LISTS)?;
        }

        for row in &self.data.rows {
            writeln!(
                f,
                "{} {} {}",
                Self::marker(row.selected),
                labels::row_icon(&row.status),
                row.display_name
            )?;
            writeln!(f, "      {}", labels::row_status(&row.status))?;
            writeln!(f, "      ID: {}", row.id)?;
            if let ListRowStatus::Error { reason } = &row.status {
                writeln!(f, "      {}", labels::failure_detail(reason))?;
            }
        }

        writeln!(f)?;
        let header = &self.data.header;
        if !header.user_label.is_empty() {
            writeln!(f, "Usuário: {}", header.user_label)?;
        }
        writeln!(f, "Origem: {}", header.source)?;
        if let Some(at) = self.data.fetched_at {
            writeln!(
                f,
                "Atualizado: {} ({})",
                at.to_rfc3339(),
                format_relative_time(at, chrono::Utc::now())
            )?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ListSelectorView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Column Panel View
// --------------------------------------------------------

pub struct ColumnPanelView<'a> {
    data: &'a ColumnPanelViewModel,
    mode: ViewMode,
    width: usize,
}

impl<'a> ColumnPanelView<'a> {
    pub fn new(data: &'a ColumnPanelViewModel, mode: ViewMode) -> Self {
        Self {
            data,
            mode,
            width: grid::terminal_width(),
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let ColumnPanelViewModel::Columns { cards, .. } = self.data {
            for card in cards {
                writeln!(f, "{}", card.internal_name)?;
            }
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data {
            ColumnPanelViewModel::Placeholder => writeln!(f, "{}", labels::PLACEHOLDER),
            ColumnPanelViewModel::ListError { list, reason } => writeln!(
                f,
                "{} {}: {} ({})",
                labels::ICON_ERROR,
                list.display_name,
                labels::LIST_ERROR_TITLE,
                reason
            ),
            ColumnPanelViewModel::Columns { cards, .. } => {
                let name_width = cards
                    .iter()
                    .map(|c| c.internal_name.chars().count())
                    .max()
                    .unwrap_or(0);
                for card in cards {
                    write!(
                        f,
                        "{:<name_width$}  {:<13}  {}",
                        card.internal_name,
                        card.column_type.label(),
                        card.role.label(),
                    )?;
                    if card.required {
                        write!(f, " {}", labels::REQUIRED_BADGE)?;
                    }
                    writeln!(f)?;
                }
                Ok(())
            }
        }
    }

    fn render_list_header(
        &self,
        f: &mut fmt::Formatter,
        list: &ListHeaderViewModel,
    ) -> fmt::Result {
        writeln!(f, "{}", list.display_name)?;
        writeln!(f, "ID: {}", list.id)?;
        if let Some(url) = &list.web_url {
            writeln!(f, "{}: {}", labels::OPEN_LINK, url)?;
        }
        writeln!(f)
    }

    fn render_full(&self, f: &mut fmt::Formatter, verbose: bool) -> fmt::Result {
        match self.data {
            ColumnPanelViewModel::Placeholder => writeln!(f, "{}", labels::PLACEHOLDER),
            ColumnPanelViewModel::ListError { list, reason } => {
                writeln!(f, "{} {}", labels::ICON_ERROR, labels::LIST_ERROR_TITLE)?;
                writeln!(f)?;
                writeln!(f, "{}", labels::list_error_body(&list.display_name))?;
                writeln!(f, "{}", labels::failure_detail(reason))?;
                if verbose {
                    writeln!(f, "ID: {}", list.id)?;
                }
                Ok(())
            }
            ColumnPanelViewModel::Columns { list, cards } => {
                self.render_list_header(f, list)?;

                if cards.is_empty() {
                    writeln!(f, "{}", labels::EMPTY_COLUMNS)?;
                } else {
                    let columns = grid::grid_columns(self.width);
                    let inner = card_width(self.width, columns, CARD_GAP).saturating_sub(4).max(4);
                    let contents: Vec<Vec<String>> = cards
                        .iter()
                        .map(|card| card_lines(card, inner, verbose))
                        .collect();
                    for line in layout_cards(&contents, inner, columns) {
                        writeln!(f, "{}", line)?;
                    }
                }

                writeln!(f)?;
                writeln!(f, "{}", labels::FOOTER_TIP)
            }
        }
    }
}

/// Text content of one card, each line at most `inner` characters.
fn card_lines(card: &ColumnCardViewModel, inner: usize, verbose: bool) -> Vec<String> {
    let mut badges = format!("[{}]", card.role.label());
    if card.required {
        badges.push_str(&format!(" [{}]", labels::REQUIRED_BADGE));
    }

    let mut lines = vec![truncate(&badges, inner), truncate(&card.display_name, inner)];
    // The internal name is never cut: it wraps instead
    lines.extend(wrap_chars(&format!("InternalName: {}", card.internal_name), inner));
    lines.push(truncate(&format!("Tipo: {}", card.column_type.label()), inner));

    if verbose {
        lines.extend(wrap_chars(&format!("ID: {}", card.id), inner));
        if card.read_only {
            lines.push(truncate("Somente leitura", inner));
        }
    }

    lines
}

impl<'a> fmt::Display for ColumnPanelView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_full(f, false),
            ViewMode::Verbose => self.render_full(f, true),
        }
    }
}
