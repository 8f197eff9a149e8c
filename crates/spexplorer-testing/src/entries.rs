//! Builders for domain entries and their wire-shape JSON.

use serde_json::{Value, json};
use spexplorer_types::{
    ColumnDescriptor, ColumnKindFlags, FailureReason, ListInfo, ListMetadataEntry,
};

pub fn ok_entry(name: &str, id: &str, columns: Vec<ColumnDescriptor>) -> ListMetadataEntry {
    ListMetadataEntry::Ok {
        list: ListInfo::new(name, id)
            .with_web_url(format!("https://contoso.sharepoint.com/Lists/{id}")),
        columns,
    }
}

pub fn failed_entry(name: &str, id: &str) -> ListMetadataEntry {
    failed_entry_with(name, id, FailureReason::AccessDenied)
}

pub fn failed_entry_with(name: &str, id: &str, reason: FailureReason) -> ListMetadataEntry {
    ListMetadataEntry::Failed {
        list: ListInfo::new(name, id),
        reason,
    }
}

pub fn column(name: &str, display_name: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        id: format!("col-{}", name.to_ascii_lowercase()),
        name: name.to_string(),
        display_name: display_name.to_string(),
        required: false,
        read_only: false,
        kind: ColumnKindFlags::default(),
    }
}

/// The required `Title` text column every list carries.
pub fn title_column() -> ColumnDescriptor {
    ColumnDescriptor {
        id: "c1".to_string(),
        required: true,
        kind: ColumnKindFlags {
            text: true,
            ..Default::default()
        },
        ..column("Title", "Title")
    }
}

pub fn system_column(name: &str, display_name: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        read_only: true,
        kind: ColumnKindFlags {
            date_time: true,
            ..Default::default()
        },
        ..column(name, display_name)
    }
}

pub fn choice_column(name: &str, display_name: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        kind: ColumnKindFlags {
            choice: true,
            ..Default::default()
        },
        ..column(name, display_name)
    }
}

/// Bulk wire document with the Tasks scenario: one list, one `Title` column.
pub fn tasks_document() -> Value {
    json!([
        {
            "list": {"displayName": "Tasks", "id": "1", "webUrl": "https://x/tasks"},
            "columns": [
                {"id": "c1", "name": "Title", "displayName": "Title",
                 "required": true, "readOnly": false, "text": true}
            ]
        }
    ])
}

/// Bulk wire document with the Risks scenario: one inaccessible list.
pub fn risks_document() -> Value {
    json!([
        {"list": {"displayName": "Risks", "id": "2"}, "error": true}
    ])
}

/// A mixed document: a failed list first, then two readable lists.
pub fn mixed_document() -> Value {
    json!([
        {"list": {"displayName": "Risks", "id": "2"}, "error": 403},
        {
            "list": {"displayName": "Contratos", "id": "10", "webUrl": "https://x/contratos"},
            "columns": [
                {"id": "a", "name": "Title", "displayName": "Título", "required": true, "text": {}},
                {"id": "b", "name": "ValorTotal", "displayName": "Valor Total", "number": {}},
                {"id": "c", "name": "Created", "displayName": "Criado", "readOnly": true, "dateTime": {}},
                {"id": "d", "name": "Status_x0020_Contrato", "displayName": "Status do Contrato", "choice": {"choices": ["Ativo", "Encerrado"]}},
                {"id": "e", "name": "Anexo", "displayName": "Anexo"}
            ]
        },
        {
            "list": {"displayName": "Vazia", "id": "11", "webUrl": "https://x/vazia"},
            "columns": []
        }
    ])
}
