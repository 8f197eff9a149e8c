mod context;

pub mod columns;
pub mod init;
pub mod lists;
pub mod tui;

pub use context::HandlerContext;
