use chrono::{DateTime, Utc};
use serde::Serialize;
use spexplorer_types::{ColumnRole, ColumnType, FailureReason};
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct PageHeaderViewModel {
    pub environment: String,
    pub user_label: String,
    pub source: String,
}

// --------------------------------------------------------
// List Selector (sidebar)
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListRowStatus {
    Ready { column_count: usize },
    Error { reason: FailureReason },
}

#[derive(Debug, Clone, Serialize)]
pub struct ListRowViewModel {
    pub id: String,
    pub display_name: String,
    pub status: ListRowStatus,
    pub selected: bool,
}

impl ListRowViewModel {
    pub fn is_error(&self) -> bool {
        matches!(self.status, ListRowStatus::Error { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListSelectorViewModel {
    pub header: PageHeaderViewModel,
    pub rows: Vec<ListRowViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

impl ListSelectorViewModel {
    pub fn selected_index(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.selected)
    }

    pub fn failed_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_error()).count()
    }
}

// --------------------------------------------------------
// Column Viewer (detail panel)
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ListHeaderViewModel {
    pub display_name: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnCardViewModel {
    pub id: String,
    pub internal_name: String,
    pub display_name: String,
    pub role: ColumnRole,
    pub required: bool,
    pub read_only: bool,
    pub column_type: ColumnType,
}

/// The four mutually exclusive states of the detail panel.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ColumnPanelViewModel {
    /// Nothing selected
    Placeholder,
    /// Selected list could not be read
    ListError {
        list: ListHeaderViewModel,
        reason: FailureReason,
    },
    /// Selected list with its columns; `cards` may be empty
    Columns {
        list: ListHeaderViewModel,
        cards: Vec<ColumnCardViewModel>,
    },
}

// --------------------------------------------------------
// Whole TUI screen
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ExplorerScreenViewModel {
    pub loading: bool,
    pub selector: ListSelectorViewModel,
    pub panel: ColumnPanelViewModel,
}

// --------------------------------------------------------
// CreateView Trait Implementations
// --------------------------------------------------------

impl CreateView for ListSelectorViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::explorer::ListSelectorView;
        Box::new(ListSelectorView::new(self, mode))
    }
}

impl CreateView for ColumnPanelViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::explorer::ColumnPanelView;
        Box::new(ColumnPanelView::new(self, mode))
    }
}
