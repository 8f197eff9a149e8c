use spexplorer_types::FailureReason;

use crate::presentation::view_models::ListRowStatus;

pub const PAGE_TITLE: &str = "Explorador de Dados";
pub const PAGE_SUBTITLE: &str = "Verifique os nomes internos das colunas no SharePoint";
pub const SIDEBAR_TITLE: &str = "Listas Identificadas";
pub const LOADING_CAPTION: &str = "Explorando Estrutura SharePoint...";
pub const PLACEHOLDER: &str = "Selecione uma lista";
pub const LIST_ERROR_TITLE: &str = "Acesso Negado ou Lista Inexistente";
pub const CONNECTION_ERROR: &str = "Erro de Conexão";
pub const OPEN_LINK: &str = "Ver no SharePoint";
pub const REQUIRED_BADGE: &str = "Obrigatória";
pub const FOOTER_TIP: &str =
    "DICA: Use o InternalName em scripts e conexões para maior confiabilidade.";
pub const EMPTY_LISTS: &str = "Nenhuma lista disponível.";
pub const EMPTY_COLUMNS: &str = "Esta lista não possui colunas.";

pub const ICON_OK: &str = "✔";
pub const ICON_ERROR: &str = "⚠";

pub fn environment(label: &str) -> String {
    format!("Ambiente: {}", label)
}

pub fn list_error_body(display_name: &str) -> String {
    format!(
        "Não foi possível encontrar a lista {}. Certifique-se de que a lista existe no site SharePoint e que seu usuário tem permissões de leitura.",
        display_name
    )
}

pub fn failure_detail(reason: &FailureReason) -> String {
    format!("Motivo: {}", reason)
}

/// Second line of a sidebar row.
pub fn row_status(status: &ListRowStatus) -> String {
    match status {
        ListRowStatus::Ready { column_count } => format!("{} Colunas", column_count),
        ListRowStatus::Error { .. } => CONNECTION_ERROR.to_string(),
    }
}

pub fn row_icon(status: &ListRowStatus) -> &'static str {
    match status {
        ListRowStatus::Ready { .. } => ICON_OK,
        ListRowStatus::Error { .. } => ICON_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_status_labels() {
        assert_eq!(row_status(&ListRowStatus::Ready { column_count: 1 }), "1 Colunas");
        assert_eq!(
            row_status(&ListRowStatus::Error {
                reason: FailureReason::NotFound
            }),
            "Erro de Conexão"
        );
    }

    #[test]
    fn test_list_error_body_names_the_list() {
        let body = list_error_body("Risks");
        assert!(body.starts_with("Não foi possível encontrar a lista Risks."));
        assert!(body.contains("permissões de leitura"));
    }
}
