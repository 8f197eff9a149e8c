use spexplorer_graph::{FixtureSource, GraphSource, MetadataSource};
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::credentials::{ChainedCredentials, CredentialProvider, EnvCredentials, StaticCredentials};
use crate::Result;

/// Picks the metadata source: a fixture file when given, Microsoft Graph otherwise.
pub fn build_source(config: &Config, fixture: Option<&Path>) -> Result<Arc<dyn MetadataSource>> {
    if let Some(path) = fixture {
        tracing::debug!(path = %path.display(), "using fixture metadata source");
        return Ok(Arc::new(FixtureSource::new(path)));
    }

    let source = GraphSource::new(config.graph_settings())?;
    Ok(Arc::new(source))
}

/// Fallback chain: `auth.fallback_token` from config, then `SPEXPLORER_ACCESS_TOKEN`.
pub fn build_credentials(config: &Config) -> Arc<dyn CredentialProvider> {
    Arc::new(ChainedCredentials::new(vec![
        Box::new(StaticCredentials::new(config.auth.fallback_token.as_deref())),
        Box::new(EnvCredentials::default()),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_fixture_takes_precedence_over_graph() {
        // Default config has no site id, so Graph would fail to build
        let source = build_source(&Config::default(), Some(Path::new("lists.json"))).unwrap();
        assert_eq!(source.describe(), "fixture lists.json");
    }

    #[test]
    fn test_graph_requires_site_id() {
        let result = build_source(&Config::default(), None);
        assert!(matches!(result, Err(Error::Source(_))));
    }

    #[test]
    fn test_graph_from_template() {
        let source = build_source(&Config::template(), None).unwrap();
        assert!(source.describe().starts_with("Microsoft Graph"));
    }

    #[test]
    fn test_credentials_prefer_config_token() {
        let mut config = Config::default();
        config.auth.fallback_token = Some("from-config".to_string());
        let credentials = build_credentials(&config);
        assert_eq!(credentials.fallback_token().unwrap().expose(), "from-config");
        assert_eq!(credentials.describe(), "config -> env:SPEXPLORER_ACCESS_TOKEN");
    }
}
