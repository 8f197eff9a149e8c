pub mod common;
pub mod explorer;
pub mod init;
pub mod result;

pub use common::{OutputFormat, StatusBadge, StatusLevel, Tip, ViewMode};
pub use explorer::{
    ColumnCardViewModel, ColumnPanelViewModel, ExplorerScreenViewModel, ListHeaderViewModel,
    ListRowStatus, ListRowViewModel, ListSelectorViewModel, PageHeaderViewModel,
};
pub use init::{InitOutcome, InitResultViewModel};
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridge from a view model to its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
