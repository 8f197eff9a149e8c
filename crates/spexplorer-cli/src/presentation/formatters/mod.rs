pub mod grid;
pub mod text;
pub mod time;

pub use grid::{grid_columns, terminal_width};
pub use text::{pad_right, truncate, wrap_chars};
pub use time::format_relative_time;
