use serde::Serialize;
use std::fmt;

use super::{CreateView, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitOutcome {
    Created,
    Overwritten,
    /// A config file was already present and `--force` was not given
    KeptExisting,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitResultViewModel {
    pub config_path: String,
    pub outcome: InitOutcome,
    pub environment: String,
    pub configured_lists: Vec<String>,
}

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::init::InitResultView;
        Box::new(InitResultView::new(self, mode))
    }
}
