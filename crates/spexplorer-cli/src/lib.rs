// NOTE: spexplorer Architecture
//
// Three layers, one direction:
//   spexplorer-graph    the metadata collaborator (Graph or fixture), returns typed entries
//   spexplorer-runtime  token resolution, ticketed activations, selection state
//   spexplorer (here)   CLI parsing, handlers, presentation (console + TUI)
//
// The loader never raises: a failed bulk call becomes an empty collection
// after being logged. Per-list failures travel as `ListMetadataEntry::Failed`
// and are rendered, not logged.

mod args;
mod commands;
mod context;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, LogLevel, OutputFormat, ViewModeArgs};
pub use commands::run;
