// Views turn view models into text (fmt::Display) or ratatui widgets.
// Labels shared by both live in `labels`.

pub mod explorer;
pub mod init;
pub mod labels;
pub mod tui;

pub use explorer::{ColumnPanelView, ListSelectorView};
pub use init::InitResultView;
