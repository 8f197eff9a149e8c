use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::InitOutcome;
use anyhow::{Context, Result};
use spexplorer_runtime::Config;
use std::path::Path;

pub fn handle(data_dir: &Path, force: bool, hctx: &HandlerContext) -> Result<()> {
    let config_path = Config::default_path(data_dir);
    let exists = config_path.exists();

    let (config, outcome) = if exists && !force {
        let config = Config::load_from(&config_path)
            .with_context(|| format!("reading existing config {}", config_path.display()))?;
        (config, InitOutcome::KeptExisting)
    } else {
        let config = Config::template();
        config
            .save_to(&config_path)
            .with_context(|| format!("writing config {}", config_path.display()))?;
        tracing::info!(path = %config_path.display(), overwritten = exists, "config written");
        let outcome = if exists {
            InitOutcome::Overwritten
        } else {
            InitOutcome::Created
        };
        (config, outcome)
    };

    hctx.render(presenters::present_init_result(&config_path, &config, outcome))
}
