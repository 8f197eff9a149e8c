//! Fallback credential providers.
//!
//! A user's own token always wins. When it is absent the loader asks the
//! injected [`CredentialProvider`] for a fallback token.

use spexplorer_types::{AccessToken, User};

pub const TOKEN_ENV_VAR: &str = "SPEXPLORER_ACCESS_TOKEN";

pub trait CredentialProvider: Send + Sync {
    fn fallback_token(&self) -> Option<AccessToken>;

    fn describe(&self) -> String;
}

/// User token first, then the provider's fallback.
pub fn resolve_token(user: &User, fallback: &dyn CredentialProvider) -> Option<AccessToken> {
    if let Some(token) = &user.access_token {
        return Some(token.clone());
    }
    let token = fallback.fallback_token();
    if token.is_some() {
        tracing::debug!(user = %user.id, provider = %fallback.describe(), "using fallback token");
    }
    token
}

/// Never supplies a token.
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn fallback_token(&self) -> Option<AccessToken> {
        None
    }

    fn describe(&self) -> String {
        "none".to_string()
    }
}

/// A token fixed at construction, typically `auth.fallback_token` from config.
pub struct StaticCredentials {
    token: Option<AccessToken>,
}

impl StaticCredentials {
    pub fn new(raw: Option<&str>) -> Self {
        Self {
            token: raw.and_then(AccessToken::new),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn fallback_token(&self) -> Option<AccessToken> {
        self.token.clone()
    }

    fn describe(&self) -> String {
        "config".to_string()
    }
}

/// Reads the token from an environment variable at lookup time.
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(TOKEN_ENV_VAR)
    }
}

impl CredentialProvider for EnvCredentials {
    fn fallback_token(&self) -> Option<AccessToken> {
        std::env::var(&self.var).ok().and_then(AccessToken::new)
    }

    fn describe(&self) -> String {
        format!("env:{}", self.var)
    }
}

/// Tries each provider in order and returns the first token found.
pub struct ChainedCredentials {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl ChainedCredentials {
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }
}

impl CredentialProvider for ChainedCredentials {
    fn fallback_token(&self) -> Option<AccessToken> {
        self.providers.iter().find_map(|p| p.fallback_token())
    }

    fn describe(&self) -> String {
        self.providers
            .iter()
            .map(|p| p.describe())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_token_wins_over_fallback() {
        let user = User::new("ops").with_token(AccessToken::new("mine"));
        let fallback = StaticCredentials::new(Some("global"));

        let token = resolve_token(&user, &fallback).unwrap();
        assert_eq!(token.expose(), "mine");
    }

    #[test]
    fn test_fallback_used_when_user_has_no_token() {
        let user = User::new("ops");
        let fallback = StaticCredentials::new(Some("global"));

        let token = resolve_token(&user, &fallback).unwrap();
        assert_eq!(token.expose(), "global");
    }

    #[test]
    fn test_no_token_anywhere() {
        assert!(resolve_token(&User::new("ops"), &NoCredentials).is_none());
        assert!(resolve_token(&User::new("ops"), &StaticCredentials::new(Some("  "))).is_none());
    }

    #[test]
    fn test_chain_takes_first_available() {
        let chain = ChainedCredentials::new(vec![
            Box::new(StaticCredentials::new(None)),
            Box::new(StaticCredentials::new(Some("second"))),
            Box::new(StaticCredentials::new(Some("third"))),
        ]);
        assert_eq!(chain.fallback_token().unwrap().expose(), "second");
        assert_eq!(chain.describe(), "config -> config -> config");
    }

    #[test]
    fn test_env_provider_with_unset_variable() {
        let provider = EnvCredentials::new("SPEXPLORER_TEST_VARIABLE_THAT_IS_NEVER_SET");
        assert!(provider.fallback_token().is_none());
    }
}
