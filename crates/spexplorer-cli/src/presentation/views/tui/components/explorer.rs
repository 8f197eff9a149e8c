//! Explorer Component (page-level)
//!
//! Owns the card grid scroll offset and routes keys: selection changes go
//! to [`ExplorerState`], everything with a side effect goes up as an
//! [`ExplorerAction`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use spexplorer_runtime::ExplorerState;
use spexplorer_types::ListMetadataEntry;

use crate::presentation::view_models::{ColumnPanelViewModel, ExplorerScreenViewModel};
use crate::presentation::views::tui::{
    ColumnGridView, ColumnPanelWidget, HeaderView, LoadingView, SidebarView, StatusBarView,
};

/// Below this width the sidebar stacks above the detail panel.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 100;
const SIDEBAR_WIDTH: u16 = 32;
const STACKED_SIDEBAR_MAX_HEIGHT: u16 = 10;
const PAGE_ROWS: usize = 1;

/// Actions the renderer must carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerAction {
    Quit,
    Refresh,
    OpenLink(String),
}

#[derive(Default)]
pub struct ExplorerComponent {
    /// First visible grid row
    grid_scroll: usize,
    /// Grid rows at the last rendered width, for clamping
    grid_rows: usize,
}

impl ExplorerComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_scroll(&self) -> usize {
        self.grid_scroll
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &mut ExplorerState,
    ) -> Option<ExplorerAction> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(ExplorerAction::Quit)
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(ExplorerAction::Quit),
            KeyCode::Char('r') => Some(ExplorerAction::Refresh),
            KeyCode::Char('o') => Self::selected_link(state).map(ExplorerAction::OpenLink),
            KeyCode::Up | KeyCode::Char('k') => {
                self.after_selection(state.move_selection(-1));
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.after_selection(state.move_selection(1));
                None
            }
            KeyCode::Home => {
                self.after_selection(state.select_first());
                None
            }
            KeyCode::End => {
                self.after_selection(state.select_last());
                None
            }
            KeyCode::PageUp => {
                self.grid_scroll = self.grid_scroll.saturating_sub(PAGE_ROWS);
                None
            }
            KeyCode::PageDown => {
                let max = self.grid_rows.saturating_sub(1);
                self.grid_scroll = (self.grid_scroll + PAGE_ROWS).min(max);
                None
            }
            _ => None,
        }
    }

    fn after_selection(&mut self, changed: bool) {
        if changed {
            self.grid_scroll = 0;
        }
    }

    /// The link is only offered for lists that loaded.
    fn selected_link(state: &ExplorerState) -> Option<String> {
        match state.selected_entry()? {
            ListMetadataEntry::Ok { list, .. } => list.web_url.clone(),
            ListMetadataEntry::Failed { .. } => None,
        }
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        screen: &ExplorerScreenViewModel,
        tick: usize,
    ) {
        if screen.loading {
            f.render_widget(LoadingView::new(tick), area);
            return;
        }

        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        f.render_widget(HeaderView::new(&screen.selector.header), header_area);

        let [sidebar_area, panel_area] = if body_area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .areas(body_area)
        } else {
            let wanted = (screen.selector.rows.len() as u16)
                .saturating_mul(2)
                .saturating_add(2)
                .clamp(3, STACKED_SIDEBAR_MAX_HEIGHT);
            Layout::vertical([Constraint::Length(wanted), Constraint::Min(0)]).areas(body_area)
        };

        f.render_widget(SidebarView::new(&screen.selector), sidebar_area);

        // Index safety: clamp the scroll to what the current width produces
        self.grid_rows = match &screen.panel {
            ColumnPanelViewModel::Columns { cards, .. } => {
                let grid = ColumnPanelWidget::grid_area(panel_area);
                ColumnGridView::row_count(cards.len(), grid.width)
            }
            _ => 0,
        };
        self.grid_scroll = self.grid_scroll.min(self.grid_rows.saturating_sub(1));

        f.render_widget(ColumnPanelWidget::new(&screen.panel, self.grid_scroll), panel_area);
        f.render_widget(StatusBarView::new(&screen.selector), status_area);
    }
}
