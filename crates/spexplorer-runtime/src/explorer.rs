//! Explorer view state: loading flag, fetched entries and the selection.
//!
//! Every activation takes a [`RequestTicket`]. Only the completion carrying
//! the most recent ticket is applied; anything older is dropped, so a slow
//! response for a previous user can never overwrite newer data.

use chrono::{DateTime, Utc};
use spexplorer_types::{ListMetadataEntry, User, initial_selection};

/// Sequence number of one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct ExplorerState {
    user: Option<User>,
    loading: bool,
    entries: Vec<ListMetadataEntry>,
    /// Selected list, keyed by list id.
    selected_id: Option<String>,
    latest_ticket: u64,
    fetched_at: Option<DateTime<Utc>>,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerState {
    /// Starts in the loading state; the first activation settles it.
    pub fn new() -> Self {
        Self {
            user: None,
            loading: true,
            entries: Vec::new(),
            selected_id: None,
            latest_ticket: 0,
            fetched_at: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn entries(&self) -> &[ListMetadataEntry] {
        &self.entries
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Records the active user. Returns `true` when the identity changed and
    /// the caller must run a new activation.
    pub fn set_user(&mut self, user: User) -> bool {
        if self.user.as_ref() == Some(&user) {
            return false;
        }
        self.user = Some(user);
        true
    }

    /// Opens a new activation and supersedes every earlier ticket.
    pub fn begin_activation(&mut self) -> RequestTicket {
        self.latest_ticket += 1;
        self.loading = true;
        RequestTicket(self.latest_ticket)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest_ticket
    }

    /// Settles an activation that found no token: nothing fetched, nothing
    /// selected, no error.
    pub fn finish_unauthenticated(&mut self, ticket: RequestTicket) -> bool {
        self.apply(ticket, Vec::new(), None)
    }

    /// Applies the entries of a finished fetch. A failed bulk call arrives
    /// here as an empty vector. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub fn complete(&mut self, ticket: RequestTicket, entries: Vec<ListMetadataEntry>) -> bool {
        self.apply(ticket, entries, Some(Utc::now()))
    }

    fn apply(
        &mut self,
        ticket: RequestTicket,
        entries: Vec<ListMetadataEntry>,
        fetched_at: Option<DateTime<Utc>>,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "discarding stale metadata response"
            );
            return false;
        }

        self.selected_id = initial_selection(&entries).map(|idx| entries[idx].list().id.clone());
        self.entries = entries;
        self.fetched_at = fetched_at;
        self.loading = false;
        true
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_id.as_deref()?;
        self.entries.iter().position(|e| e.list().id == id)
    }

    pub fn selected_entry(&self) -> Option<&ListMetadataEntry> {
        self.selected_index().map(|idx| &self.entries[idx])
    }

    pub fn is_selected(&self, entry: &ListMetadataEntry) -> bool {
        self.selected_id.as_deref() == Some(entry.list().id.as_str())
    }

    /// Selects the entry with `id`. Unknown ids leave the selection as is.
    pub fn select(&mut self, id: &str) -> bool {
        if self.loading || !self.entries.iter().any(|e| e.list().id == id) {
            return false;
        }
        self.selected_id = Some(id.to_string());
        true
    }

    pub fn select_index(&mut self, idx: usize) -> bool {
        if self.loading {
            return false;
        }
        match self.entries.get(idx) {
            Some(entry) => {
                self.selected_id = Some(entry.list().id.clone());
                true
            }
            None => false,
        }
    }

    /// Moves the selection by `delta` rows, clamped to the collection.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let last = self.entries.len() - 1;
        let target = match self.selected_index() {
            Some(current) => current.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.select_index(target)
    }

    pub fn select_first(&mut self) -> bool {
        self.select_index(0)
    }

    pub fn select_last(&mut self) -> bool {
        match self.entries.len() {
            0 => false,
            n => self.select_index(n - 1),
        }
    }

    /// Finds an entry by id first, then by exact display name.
    pub fn find(&self, key: &str) -> Option<&ListMetadataEntry> {
        self.entries
            .iter()
            .find(|e| e.list().id == key)
            .or_else(|| self.entries.iter().find(|e| e.list().display_name == key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spexplorer_testing::entries::{failed_entry, ok_entry, title_column};
    use spexplorer_types::AccessToken;

    fn loaded(entries: Vec<ListMetadataEntry>) -> ExplorerState {
        let mut state = ExplorerState::new();
        let ticket = state.begin_activation();
        assert!(state.complete(ticket, entries));
        state
    }

    #[test]
    fn test_starts_loading_with_nothing_selected() {
        let state = ExplorerState::new();
        assert!(state.is_loading());
        assert!(state.selected_entry().is_none());
    }

    #[test]
    fn test_complete_selects_first_ok_entry() {
        let state = loaded(vec![
            failed_entry("Risks", "2"),
            ok_entry("Tasks", "1", vec![title_column()]),
            ok_entry("Docs", "3", vec![]),
        ]);

        assert!(!state.is_loading());
        assert_eq!(state.selected_id(), Some("1"));
        assert_eq!(state.selected_index(), Some(1));
        assert!(state.fetched_at().is_some());
    }

    #[test]
    fn test_complete_all_failed_selects_first() {
        let state = loaded(vec![failed_entry("Risks", "2"), failed_entry("Audit", "4")]);
        assert_eq!(state.selected_id(), Some("2"));
    }

    #[test]
    fn test_complete_empty_selects_nothing() {
        let state = loaded(Vec::new());
        assert!(!state.is_loading());
        assert!(state.selected_entry().is_none());
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut state = ExplorerState::new();
        let first = state.begin_activation();
        let second = state.begin_activation();

        assert!(!state.complete(first, vec![ok_entry("Old", "old", vec![])]));
        assert!(state.is_loading(), "stale completion must not end loading");
        assert!(state.entries().is_empty());

        assert!(state.complete(second, vec![ok_entry("New", "new", vec![])]));
        assert_eq!(state.selected_id(), Some("new"));

        // A late arrival after the current one is still ignored
        assert!(!state.complete(first, vec![ok_entry("Old", "old", vec![])]));
        assert_eq!(state.entries()[0].list().id, "new");
    }

    #[test]
    fn test_unauthenticated_clears_previous_data() {
        let mut state = loaded(vec![ok_entry("Tasks", "1", vec![])]);
        let ticket = state.begin_activation();
        assert!(state.finish_unauthenticated(ticket));

        assert!(!state.is_loading());
        assert!(state.entries().is_empty());
        assert!(state.selected_id().is_none());
        assert!(state.fetched_at().is_none());
    }

    #[test]
    fn test_selection_keyed_by_id_not_display_name() {
        let mut state = loaded(vec![
            ok_entry("Tarefas", "a", vec![]),
            ok_entry("Tarefas", "b", vec![]),
        ]);

        assert!(state.select("b"));
        assert!(!state.is_selected(&state.entries()[0]));
        assert!(state.is_selected(&state.entries()[1]));
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn test_select_unknown_id_keeps_selection() {
        let mut state = loaded(vec![ok_entry("Tasks", "1", vec![])]);
        assert!(!state.select("missing"));
        assert_eq!(state.selected_id(), Some("1"));
    }

    #[test]
    fn test_selection_ignored_while_loading() {
        let mut state = loaded(vec![ok_entry("A", "1", vec![]), ok_entry("B", "2", vec![])]);
        let _ticket = state.begin_activation();
        assert!(!state.select("2"));
        assert!(!state.move_selection(1));
        assert_eq!(state.selected_id(), Some("1"));
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut state = loaded(vec![
            ok_entry("A", "1", vec![]),
            ok_entry("B", "2", vec![]),
            ok_entry("C", "3", vec![]),
        ]);

        assert!(state.move_selection(-1));
        assert_eq!(state.selected_id(), Some("1"));
        state.move_selection(5);
        assert_eq!(state.selected_id(), Some("3"));
        state.move_selection(-1);
        assert_eq!(state.selected_id(), Some("2"));
        state.select_first();
        assert_eq!(state.selected_id(), Some("1"));
        state.select_last();
        assert_eq!(state.selected_id(), Some("3"));
    }

    #[test]
    fn test_set_user_reports_identity_change() {
        let mut state = ExplorerState::new();
        let ana = User::new("ana").with_token(AccessToken::new("t1"));

        assert!(state.set_user(ana.clone()));
        assert!(!state.set_user(ana.clone()));
        assert!(state.set_user(ana.with_token(AccessToken::new("t2"))));
        assert!(state.set_user(User::new("bruno")));
    }

    #[test]
    fn test_find_by_id_then_display_name() {
        let state = loaded(vec![
            ok_entry("Tasks", "1", vec![]),
            failed_entry("Risks", "2"),
        ]);
        assert_eq!(state.find("2").map(|e| e.list().display_name.as_str()), Some("Risks"));
        assert_eq!(state.find("Tasks").map(|e| e.list().id.as_str()), Some("1"));
        assert!(state.find("nope").is_none());
    }
}
