use spexplorer_runtime::Config;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, InitOutcome, InitResultViewModel, StatusBadge, Tip,
};

pub fn present_init_result(
    config_path: &Path,
    config: &Config,
    outcome: InitOutcome,
) -> CommandResultViewModel<InitResultViewModel> {
    let content = InitResultViewModel {
        config_path: config_path.display().to_string(),
        outcome,
        environment: config.environment.clone(),
        configured_lists: config.graph.lists.clone(),
    };

    let mut result = CommandResultViewModel::new(content);

    match outcome {
        InitOutcome::Created | InitOutcome::Overwritten => {
            result = result
                .with_badge(StatusBadge::success("Configuração gravada"))
                .with_suggestion(Tip::new(
                    "Edite graph.site_id e graph.lists com os valores do seu site",
                ))
                .with_suggestion(
                    Tip::new("Abra o explorador").with_command("spexplorer --token <TOKEN>"),
                );
        }
        InitOutcome::KeptExisting => {
            result = result
                .with_badge(StatusBadge::warning("Configuração já existe"))
                .with_suggestion(
                    Tip::new("Sobrescreva com o modelo padrão")
                        .with_command("spexplorer init --force"),
                );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;

    #[test]
    fn test_kept_existing_suggests_force() {
        let config = Config::template();
        let result = present_init_result(
            Path::new("/tmp/config.toml"),
            &config,
            InitOutcome::KeptExisting,
        );

        assert_eq!(result.badge.expect("badge").level, StatusLevel::Warning);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("spexplorer init --force")
        );
        assert_eq!(result.content.configured_lists, config.graph.lists);
    }

    #[test]
    fn test_created_is_success() {
        let result = present_init_result(
            Path::new("config.toml"),
            &Config::template(),
            InitOutcome::Created,
        );
        assert_eq!(result.badge.expect("badge").level, StatusLevel::Success);
        assert_eq!(result.content.config_path, "config.toml");
    }
}
