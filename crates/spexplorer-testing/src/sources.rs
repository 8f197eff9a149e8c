//! Scripted metadata sources for loader tests.

use async_trait::async_trait;
use spexplorer_graph::{Error, MetadataSource, Result};
use spexplorer_types::{AccessToken, ListMetadataEntry};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

type Scripted = std::result::Result<Vec<ListMetadataEntry>, String>;

/// Replays scripted responses and records every call.
///
/// Responses are served in order; the last one repeats once the script runs out.
pub struct ScriptedSource {
    script: Vec<Scripted>,
    calls: AtomicUsize,
    tokens: Mutex<Vec<String>>,
}

impl ScriptedSource {
    /// Always answers with `entries`.
    pub fn new(entries: Vec<ListMetadataEntry>) -> Self {
        Self::from_script(vec![Ok(entries)])
    }

    /// Answers each call with the next element of `responses`.
    pub fn sequence(responses: Vec<Vec<ListMetadataEntry>>) -> Self {
        Self::from_script(responses.into_iter().map(Ok).collect())
    }

    /// Every call fails as a bulk error.
    pub fn failing(message: &str) -> Self {
        Self::from_script(vec![Err(message.to_string())])
    }

    fn from_script(script: Vec<Scripted>) -> Self {
        assert!(!script.is_empty(), "script needs at least one response");
        Self {
            script,
            calls: AtomicUsize::new(0),
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Tokens received, in call order.
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MetadataSource for ScriptedSource {
    async fn get_all_list_metadata(&self, token: &AccessToken) -> Result<Vec<ListMetadataEntry>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.push(token.expose().to_string());
        }

        let idx = call.min(self.script.len() - 1);
        match &self.script[idx] {
            Ok(entries) => Ok(entries.clone()),
            Err(message) => Err(Error::Unavailable(message.clone())),
        }
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}
