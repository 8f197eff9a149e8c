//! Collaborator wire shapes.
//!
//! Two payloads share the column shape:
//! - the bulk document `[{ list, columns }, { list, error }]` used by fixtures
//! - a Graph list resource `{ id, displayName, webUrl, columns }`
//!
//! Kind flags (`text`, `dateTime`, ...) are "truthy if applicable": Graph sends
//! an object such as `"text": {}`, older payloads send `true`.

use serde::Deserialize;
use serde_json::Value;
use spexplorer_types::{
    ColumnDescriptor, ColumnKindFlags, FailureReason, ListInfo, ListMetadataEntry,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireList {
    pub display_name: String,
    pub id: String,
    #[serde(default)]
    pub web_url: Option<String>,
}

impl From<WireList> for ListInfo {
    fn from(wire: WireList) -> Self {
        ListInfo {
            display_name: wire.display_name,
            id: wire.id,
            web_url: wire.web_url.filter(|u| !u.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireColumn {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub text: Option<Value>,
    #[serde(default)]
    pub date_time: Option<Value>,
    #[serde(default)]
    pub number: Option<Value>,
    #[serde(default)]
    pub boolean: Option<Value>,
    #[serde(default)]
    pub choice: Option<Value>,
}

impl From<WireColumn> for ColumnDescriptor {
    fn from(wire: WireColumn) -> Self {
        let kind = ColumnKindFlags {
            text: is_truthy(wire.text.as_ref()),
            date_time: is_truthy(wire.date_time.as_ref()),
            number: is_truthy(wire.number.as_ref()),
            boolean: is_truthy(wire.boolean.as_ref()),
            choice: is_truthy(wire.choice.as_ref()),
        };
        let display_name = wire.display_name.unwrap_or_else(|| wire.name.clone());

        ColumnDescriptor {
            id: wire.id,
            name: wire.name,
            display_name,
            required: wire.required,
            read_only: wire.read_only,
            kind,
        }
    }
}

/// One element of the bulk document.
#[derive(Debug, Clone, Deserialize)]
pub struct WireEntry {
    pub list: WireList,
    #[serde(default)]
    pub columns: Option<Vec<WireColumn>>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl WireEntry {
    /// A truthy `error` wins over any columns that came along with it.
    pub fn into_entry(self) -> ListMetadataEntry {
        let list = ListInfo::from(self.list);
        match self.error.as_ref() {
            Some(err) if is_truthy(Some(err)) => ListMetadataEntry::Failed {
                list,
                reason: failure_reason(err),
            },
            _ => ListMetadataEntry::Ok {
                list,
                columns: self
                    .columns
                    .unwrap_or_default()
                    .into_iter()
                    .map(ColumnDescriptor::from)
                    .collect(),
            },
        }
    }
}

/// Graph `GET /sites/{site}/lists/{list}?expand=columns` response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphListResource {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub columns: Vec<WireColumn>,
}

impl GraphListResource {
    pub fn into_entry(self) -> ListMetadataEntry {
        ListMetadataEntry::Ok {
            list: ListInfo::from(WireList {
                display_name: self.display_name,
                id: self.id,
                web_url: self.web_url,
            }),
            columns: self.columns.into_iter().map(ColumnDescriptor::from).collect(),
        }
    }
}

pub fn decode_bulk(payload: &str) -> serde_json::Result<Vec<ListMetadataEntry>> {
    let wire: Vec<WireEntry> = serde_json::from_str(payload)?;
    Ok(wire.into_iter().map(WireEntry::into_entry).collect())
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Best effort mapping of the collaborator's error marker. Accepts HTTP
/// status numbers, Graph error codes, or an object carrying either.
fn failure_reason(err: &Value) -> FailureReason {
    match err {
        Value::Number(n) => match n.as_u64() {
            Some(403) => FailureReason::AccessDenied,
            Some(404) => FailureReason::NotFound,
            Some(status) if (400..600).contains(&status) => FailureReason::Unavailable {
                status: status as u16,
            },
            _ => FailureReason::Unspecified,
        },
        Value::String(code) => match code.to_ascii_lowercase().as_str() {
            "accessdenied" | "forbidden" | "access_denied" => FailureReason::AccessDenied,
            "itemnotfound" | "notfound" | "not_found" => FailureReason::NotFound,
            _ => FailureReason::Unspecified,
        },
        Value::Object(map) => map
            .get("status")
            .or_else(|| map.get("code"))
            .map(failure_reason)
            .unwrap_or(FailureReason::Unspecified),
        _ => FailureReason::Unspecified,
    }
}
