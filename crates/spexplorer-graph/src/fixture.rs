use async_trait::async_trait;
use spexplorer_types::{AccessToken, ListMetadataEntry};
use std::path::{Path, PathBuf};

use crate::source::MetadataSource;
use crate::wire::decode_bulk;
use crate::{Error, Result};

/// Serves list metadata from a JSON file in the bulk wire shape.
///
/// The file is read on every call so edits show up on the next refresh.
/// The token is accepted but not inspected.
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MetadataSource for FixtureSource {
    async fn get_all_list_metadata(&self, _token: &AccessToken) -> Result<Vec<ListMetadataEntry>> {
        let payload = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| Error::FixtureIo {
                path: self.path.clone(),
                source,
            })?;

        let entries = decode_bulk(&payload)?;
        tracing::debug!(path = %self.path.display(), entries = entries.len(), "fixture loaded");
        Ok(entries)
    }

    fn describe(&self) -> String {
        format!("fixture {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn token() -> AccessToken {
        AccessToken::new("t").unwrap()
    }

    #[tokio::test]
    async fn test_reads_entries_in_file_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"list": {{"displayName": "B", "id": "2"}}, "error": true}},
                {{"list": {{"displayName": "A", "id": "1"}}, "columns": []}}
            ]"#
        )
        .unwrap();

        let source = FixtureSource::new(file.path());
        let entries = source.get_all_list_metadata(&token()).await.unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.list().display_name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_bulk_error() {
        let source = FixtureSource::new("/nonexistent/spexplorer/fixture.json");
        let err = source.get_all_list_metadata(&token()).await.unwrap_err();
        assert!(matches!(err, Error::FixtureIo { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file_is_bulk_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let source = FixtureSource::new(file.path());
        let err = source.get_all_list_metadata(&token()).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
