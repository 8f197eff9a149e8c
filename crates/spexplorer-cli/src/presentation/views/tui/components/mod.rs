pub mod explorer;

pub use explorer::{ExplorerAction, ExplorerComponent};
