//! Metadata Loader.
//!
//! One activation = resolve a token, then at most one bulk call to the
//! metadata source. The work is split in two halves so that an interactive
//! front end can run the fetch on a background task:
//!
//! ```text
//! start(state, user) ──► None                    (no token: state already settled)
//!                    └─► Some(PendingFetch) ──► fetch().await ──► state.complete(ticket, entries)
//! ```
//!
//! Bulk failures are logged and turned into an empty result here; they never
//! reach the caller.

use spexplorer_graph::MetadataSource;
use spexplorer_types::{AccessToken, ListMetadataEntry, User};
use std::sync::Arc;

use crate::credentials::{CredentialProvider, resolve_token};
use crate::explorer::{ExplorerState, RequestTicket};

/// A fetch that has been ticketed but not yet run.
#[derive(Debug)]
pub struct PendingFetch {
    pub ticket: RequestTicket,
    token: AccessToken,
}

#[derive(Clone)]
pub struct MetadataLoader {
    source: Arc<dyn MetadataSource>,
    credentials: Arc<dyn CredentialProvider>,
}

impl MetadataLoader {
    pub fn new(source: Arc<dyn MetadataSource>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            source,
            credentials,
        }
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Opens an activation for `user`. Returns `None` when no token can be
    /// resolved; the state is then already settled as empty.
    pub fn start(&self, state: &mut ExplorerState, user: &User) -> Option<PendingFetch> {
        let ticket = state.begin_activation();

        match resolve_token(user, self.credentials.as_ref()) {
            Some(token) => Some(PendingFetch { ticket, token }),
            None => {
                tracing::debug!(
                    user = %user.id,
                    "no access token available, skipping metadata fetch"
                );
                state.finish_unauthenticated(ticket);
                None
            }
        }
    }

    /// Runs the bulk call. Never fails: errors are logged and yield an empty
    /// collection.
    pub async fn fetch(&self, pending: PendingFetch) -> (RequestTicket, Vec<ListMetadataEntry>) {
        let PendingFetch { ticket, token } = pending;

        match self.source.get_all_list_metadata(&token).await {
            Ok(entries) => {
                let failed = entries.iter().filter(|e| e.is_failed()).count();
                tracing::info!(
                    ticket = ticket.seq(),
                    lists = entries.len(),
                    failed,
                    "list metadata loaded"
                );
                (ticket, entries)
            }
            Err(err) => {
                tracing::error!(
                    ticket = ticket.seq(),
                    source = %self.source.describe(),
                    error = %err,
                    "failed to explore SharePoint metadata"
                );
                (ticket, Vec::new())
            }
        }
    }

    /// Full activation on the current task.
    pub async fn activate(&self, state: &mut ExplorerState, user: &User) {
        let Some(pending) = self.start(state, user) else {
            return;
        };
        let (ticket, entries) = self.fetch(pending).await;
        state.complete(ticket, entries);
    }

    /// Records `user` and activates only when the identity changed.
    pub async fn activate_if_changed(&self, state: &mut ExplorerState, user: User) -> bool {
        if !state.set_user(user.clone()) {
            return false;
        }
        self.activate(state, &user).await;
        true
    }
}
