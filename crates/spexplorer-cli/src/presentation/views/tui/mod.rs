//! TUI views and components
//!
//! Views are stateless ratatui widgets over a view model. Components own UI
//! state (scroll offsets), handle keys and delegate drawing to views.

pub mod column_grid;
pub mod components;
pub mod header;
pub mod loading;
pub mod panel;
pub mod sidebar;
pub mod status_bar;

pub use column_grid::ColumnGridView;
pub use header::HeaderView;
pub use loading::LoadingView;
pub use panel::ColumnPanelWidget;
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;

use ratatui::style::Color;
use spexplorer_types::ColumnRole;

pub(crate) fn role_color(role: ColumnRole) -> Color {
    match role {
        ColumnRole::Primary => Color::Cyan,
        ColumnRole::System => Color::DarkGray,
        ColumnRole::Data => Color::Green,
    }
}
