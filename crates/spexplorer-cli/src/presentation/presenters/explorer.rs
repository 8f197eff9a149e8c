use spexplorer_runtime::ExplorerState;
use spexplorer_types::{ColumnDescriptor, ListInfo, ListMetadataEntry};

use crate::presentation::view_models::{
    ColumnCardViewModel, ColumnPanelViewModel, CommandResultViewModel, ExplorerScreenViewModel,
    ListHeaderViewModel, ListRowStatus, ListRowViewModel, ListSelectorViewModel,
    PageHeaderViewModel, StatusBadge, Tip,
};

pub fn present_header(
    environment: &str,
    state: &ExplorerState,
    source: String,
) -> PageHeaderViewModel {
    PageHeaderViewModel {
        environment: environment.to_string(),
        user_label: state
            .user()
            .map(|u| u.label().to_string())
            .unwrap_or_default(),
        source,
    }
}

/// Sidebar rows in loader order.
pub fn present_list_selector(
    state: &ExplorerState,
    header: PageHeaderViewModel,
) -> ListSelectorViewModel {
    let rows = state
        .entries()
        .iter()
        .map(|entry| present_row(entry, state.is_selected(entry)))
        .collect();

    ListSelectorViewModel {
        header,
        rows,
        fetched_at: state.fetched_at(),
    }
}

fn present_row(entry: &ListMetadataEntry, selected: bool) -> ListRowViewModel {
    let list = entry.list();
    let status = match entry {
        ListMetadataEntry::Ok { columns, .. } => ListRowStatus::Ready {
            column_count: columns.len(),
        },
        ListMetadataEntry::Failed { reason, .. } => ListRowStatus::Error { reason: *reason },
    };

    ListRowViewModel {
        id: list.id.clone(),
        display_name: list.display_name.clone(),
        status,
        selected,
    }
}

/// Detail panel for `entry`; `None` is the placeholder state.
pub fn present_column_panel(entry: Option<&ListMetadataEntry>) -> ColumnPanelViewModel {
    match entry {
        None => ColumnPanelViewModel::Placeholder,
        Some(ListMetadataEntry::Failed { list, reason }) => ColumnPanelViewModel::ListError {
            list: present_list_header(list),
            reason: *reason,
        },
        Some(ListMetadataEntry::Ok { list, columns }) => ColumnPanelViewModel::Columns {
            list: present_list_header(list),
            cards: columns.iter().map(present_card).collect(),
        },
    }
}

fn present_list_header(list: &ListInfo) -> ListHeaderViewModel {
    ListHeaderViewModel {
        display_name: list.display_name.clone(),
        id: list.id.clone(),
        web_url: list.web_url.clone(),
    }
}

fn present_card(column: &ColumnDescriptor) -> ColumnCardViewModel {
    ColumnCardViewModel {
        id: column.id.clone(),
        internal_name: column.name.clone(),
        display_name: column.display_name.clone(),
        role: column.role(),
        required: column.required,
        read_only: column.read_only,
        column_type: column.column_type(),
    }
}

pub fn present_screen(
    state: &ExplorerState,
    header: PageHeaderViewModel,
) -> ExplorerScreenViewModel {
    ExplorerScreenViewModel {
        loading: state.is_loading(),
        selector: present_list_selector(state, header),
        panel: present_column_panel(state.selected_entry()),
    }
}

// --------------------------------------------------------
// Console command results
// --------------------------------------------------------

pub fn present_lists(
    state: &ExplorerState,
    header: PageHeaderViewModel,
) -> CommandResultViewModel<ListSelectorViewModel> {
    let content = present_list_selector(state, header);
    let total = content.rows.len();
    let failed = content.failed_count();

    let mut result = CommandResultViewModel::new(content);

    if total == 0 {
        result = result
            .with_badge(StatusBadge::info("Nenhuma lista encontrada"))
            .with_suggestion(
                Tip::new("Informe um token de acesso")
                    .with_command("spexplorer --token <TOKEN> lists"),
            )
            .with_suggestion(
                Tip::new("Confira o site e as listas configurados")
                    .with_command("spexplorer init"),
            );
    } else if failed > 0 {
        result = result.with_badge(StatusBadge::warning(format!(
            "{} lista(s), {} com erro",
            total, failed
        )));
    } else {
        result = result.with_badge(StatusBadge::success(format!(
            "{} lista(s) encontrada(s)",
            total
        )));
    }

    if let Some(row) = result.content.rows.iter().find(|r| !r.is_error()) {
        let command = format!("spexplorer columns --list {}", row.id);
        result = result
            .with_suggestion(Tip::new("Ver as colunas de uma lista").with_command(command));
    }

    result
}

pub fn present_columns(
    entry: Option<&ListMetadataEntry>,
) -> CommandResultViewModel<ColumnPanelViewModel> {
    let content = present_column_panel(entry);

    let badge = match &content {
        ColumnPanelViewModel::Placeholder => StatusBadge::info("Nenhuma lista selecionada"),
        ColumnPanelViewModel::ListError { list, .. } => {
            StatusBadge::error(format!("{}: Acesso Negado ou Lista Inexistente", list.display_name))
        }
        ColumnPanelViewModel::Columns { list, cards } => {
            StatusBadge::success(format!("{} coluna(s) em {}", cards.len(), list.display_name))
        }
    };

    CommandResultViewModel::new(content).with_badge(badge)
}
