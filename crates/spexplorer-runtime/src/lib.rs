pub mod bootstrap;
pub mod config;
pub mod credentials;
pub mod error;
pub mod explorer;
pub mod loader;

pub use bootstrap::{build_credentials, build_source};
pub use config::{AuthConfig, Config, DEFAULT_ENVIRONMENT, GraphConfig, resolve_data_dir};
pub use credentials::{
    ChainedCredentials, CredentialProvider, EnvCredentials, NoCredentials, StaticCredentials,
    TOKEN_ENV_VAR, resolve_token,
};
pub use error::{Error, Result};
pub use explorer::{ExplorerState, RequestTicket};
pub use loader::{MetadataLoader, PendingFetch};
