use std::fmt;

/// Bearer credential used to call the metadata collaborator.
///
/// `Debug` never prints the secret so tokens cannot leak through log fields.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AccessToken(String);

impl AccessToken {
    /// Returns `None` for empty or whitespace-only input, which callers treat
    /// the same as an absent token.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// The operator the explorer is activated for.
///
/// Owned by the caller and treated as immutable for the duration of one
/// activation. Two users are the same identity when both the id and the
/// token match; any difference triggers a fresh activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
    pub access_token: Option<AccessToken>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            access_token: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_token(mut self, token: Option<AccessToken>) -> Self {
        self.access_token = token;
        self
    }

    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}
