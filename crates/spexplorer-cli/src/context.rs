use anyhow::{Context, Result};
use spexplorer_runtime::{Config, ExplorerState, MetadataLoader, build_credentials, build_source};
use spexplorer_types::{AccessToken, User};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

const FALLBACK_USER_ID: &str = "operator";

/// Everything a metadata command needs: config, the active user, the loader
/// and the tokio runtime the loader's futures run on.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: Config,
    user: User,
    loader: MetadataLoader,
    runtime: Runtime,
}

impl ExecutionContext {
    pub fn new(
        data_dir: PathBuf,
        user_id: Option<String>,
        token: Option<String>,
        fixture: Option<&Path>,
    ) -> Result<Self> {
        let config_path = Config::default_path(&data_dir);
        let config = Config::load_from(&config_path)
            .with_context(|| format!("loading config from {}", config_path.display()))?;

        let source = build_source(&config, fixture)
            .context("Metadata source is not configured. Run 'spexplorer init' or pass --fixture")?;
        let loader = MetadataLoader::new(source, build_credentials(&config));

        let user = User::new(resolve_user_id(user_id)).with_token(token.and_then(AccessToken::new));

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("starting async runtime")?;

        tracing::debug!(
            user = %user.id,
            source = %loader.source_description(),
            "execution context ready"
        );

        Ok(Self {
            data_dir,
            config,
            user,
            loader,
            runtime,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn loader(&self) -> &MetadataLoader {
        &self.loader
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Runs one activation for the current user and returns the settled state.
    pub fn load_state(&self) -> ExplorerState {
        let mut state = ExplorerState::new();
        self.runtime
            .block_on(self.loader.activate_if_changed(&mut state, self.user.clone()));
        state
    }
}

fn resolve_user_id(explicit: Option<String>) -> String {
    explicit
        .or_else(|| std::env::var("USER").ok())
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_USER_ID.to_string())
}
