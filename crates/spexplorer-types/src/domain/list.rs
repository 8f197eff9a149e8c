use serde::{Deserialize, Serialize};
use std::fmt;

use super::column::ColumnDescriptor;

/// Identity of a SharePoint list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    pub display_name: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

impl ListInfo {
    pub fn new(display_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            id: id.into(),
            web_url: None,
        }
    }

    pub fn with_web_url(mut self, url: impl Into<String>) -> Self {
        self.web_url = Some(url.into());
        self
    }
}

/// Why a single list could not be retrieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    AccessDenied,
    NotFound,
    Unavailable { status: u16 },
    /// The collaborator flagged the list without saying why.
    Unspecified,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::AccessDenied => write!(f, "acesso negado"),
            FailureReason::NotFound => write!(f, "lista não encontrada"),
            FailureReason::Unavailable { status } => write!(f, "indisponível (HTTP {})", status),
            FailureReason::Unspecified => write!(f, "erro não especificado"),
        }
    }
}

/// Result of querying one list: either its columns or a failure marker.
///
/// Per-list failures are ordinary data. They are displayed, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ListMetadataEntry {
    Ok {
        list: ListInfo,
        columns: Vec<ColumnDescriptor>,
    },
    Failed {
        list: ListInfo,
        reason: FailureReason,
    },
}

impl ListMetadataEntry {
    pub fn list(&self) -> &ListInfo {
        match self {
            ListMetadataEntry::Ok { list, .. } | ListMetadataEntry::Failed { list, .. } => list,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ListMetadataEntry::Failed { .. })
    }

    pub fn columns(&self) -> Option<&[ColumnDescriptor]> {
        match self {
            ListMetadataEntry::Ok { columns, .. } => Some(columns),
            ListMetadataEntry::Failed { .. } => None,
        }
    }
}

/// Index of the entry selected right after a fetch: the first entry that did
/// not fail, or the first entry overall when every entry failed.
pub fn initial_selection(entries: &[ListMetadataEntry]) -> Option<usize> {
    if entries.is_empty() {
        return None;
    }
    Some(entries.iter().position(|e| !e.is_failed()).unwrap_or(0))
}
