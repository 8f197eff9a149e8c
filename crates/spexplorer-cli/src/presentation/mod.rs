//! # Presentation Layer
//!
//! User interface logic for the CLI, organised as **MVVM** with a stateful
//! component for the interactive TUI.
//!
//! ## Data Flow
//!
//! ### Console output (JSON/Text)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(JSON)==> serde_json
//!                                                                        ==(Text)==> [ View ] (fmt::Display)
//! ```
//!
//! ### Interactive TUI
//!
//! ```text
//! [ TuiRenderer ] --(ExplorerState)--> [ Presenter ] --> [ ExplorerScreenViewModel ]
//!       ^                                                            |
//!       | ExplorerAction                                             v
//! [ ExplorerComponent ] <-- keys                              [ Widgets ]
//! ```
//!
//! ## Rules
//!
//! ### 1. View models carry raw data
//! Column counts are numbers, roles and types are enums. Labels such as
//! `Primária` or `3 Colunas` are produced by views, never stored.
//!
//! ### 2. `ViewMode` is density, not shape
//! * **Minimal:** ids / internal names only, for scripts
//! * **Compact:** one line per item
//! * **Standard:** the layout a person reads (default)
//! * **Verbose:** adds ids, failure reasons and provenance
//!
//! ### 3. JSON is always the full view model
//! `--format json` ignores `ViewMode`.
//!
//! ### 4. Data vs UI state
//! * Selection lives in `ExplorerState` because it is part of the explorer's
//!   behaviour (keyed by list id, reset on each activation).
//! * Grid scroll lives in `ExplorerComponent`; it is clamped on every render.
//! * The renderer routes: keys go to the component, actions come back.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Decide which badge or tip to show | `presenters/` |
//! | Change a label, colour or layout | `views/` |
//! | Truncate text or size the grid | `formatters/` |
//! | Handle a key in the TUI | `views/tui/components/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{
    CommandResultViewModel, CreateView, StatusBadge, StatusLevel, Tip,
    common::{OutputFormat, ViewMode},
};
