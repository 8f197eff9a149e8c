use async_trait::async_trait;
use spexplorer_types::{AccessToken, ListMetadataEntry};
use std::sync::Arc;

use crate::Result;

/// The external service that enumerates configured lists.
///
/// Implementations return entries in their own order; consumers must not
/// re-sort them. An `Err` means the whole call failed. A single inaccessible
/// list must be reported as a `Failed` entry instead.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn get_all_list_metadata(&self, token: &AccessToken) -> Result<Vec<ListMetadataEntry>>;

    /// Short human description used in logs and the status bar.
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: MetadataSource + ?Sized> MetadataSource for Arc<T> {
    async fn get_all_list_metadata(&self, token: &AccessToken) -> Result<Vec<ListMetadataEntry>> {
        (**self).get_all_list_metadata(token).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
