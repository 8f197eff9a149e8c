use std::fmt;

use crate::presentation::view_models::{InitOutcome, InitResultViewModel, ViewMode};

pub struct InitResultView<'a> {
    data: &'a InitResultViewModel,
    mode: ViewMode,
}

impl<'a> InitResultView<'a> {
    pub fn new(data: &'a InitResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn outcome_label(&self) -> &'static str {
        match self.data.outcome {
            InitOutcome::Created => "criado",
            InitOutcome::Overwritten => "sobrescrito",
            InitOutcome::KeptExisting => "mantido",
        }
    }
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.config_path);
        }

        writeln!(
            f,
            "Arquivo de configuração ({}): {}",
            self.outcome_label(),
            self.data.config_path
        )?;

        if matches!(self.mode, ViewMode::Standard | ViewMode::Verbose) {
            writeln!(f, "  Ambiente: {}", self.data.environment)?;
            if self.data.configured_lists.is_empty() {
                writeln!(f, "  Listas: (nenhuma)")?;
            } else {
                writeln!(f, "  Listas: {}", self.data.configured_lists.join(", "))?;
            }
        }
        Ok(())
    }
}
