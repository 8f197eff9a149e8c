use std::path::PathBuf;

/// Result type for metadata collaborator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the bulk "get all list metadata" call.
///
/// Per-list failures are not errors; they come back as
/// [`spexplorer_types::ListMetadataEntry::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the access token was rejected (HTTP 401)")]
    Unauthorized,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid Graph base URL '{url}'")]
    InvalidBaseUrl { url: String },

    #[error("metadata source unavailable: {0}")]
    Unavailable(String),

    #[error("Graph settings incomplete: {0}")]
    Settings(String),

    #[error("failed to read fixture {path}: {source}")]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode metadata payload: {0}")]
    Decode(#[from] serde_json::Error),
}
