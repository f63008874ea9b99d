//! Estado de la tabla de una página
//!
//! La tabla pasa por `Loading` al pedir la lista y termina en filas, en un
//! marcador de "sin registros" o en un error en línea.

use serde::Serialize;

use super::templates::{self, TABLE_BODY};
use crate::utils::errors::ClientError;

pub const MSG_LOADING: &str = "Carregando...";

/// Fila ya formateada para mostrar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: i64,
    pub cells: Vec<String>,
    /// Nombre del registro en el modal de confirmación
    pub label: String,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl RowView {
    pub fn new(id: i64, label: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            id,
            cells,
            label: label.into(),
            can_edit: false,
            can_delete: false,
        }
    }

    pub fn with_actions(mut self, can_edit: bool, can_delete: bool) -> Self {
        self.can_edit = can_edit;
        self.can_delete = can_delete;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Rows(Vec<RowView>),
    Empty(String),
    Error(String),
}

/// Cuerpo de la tabla (`<tbody>`)
#[derive(Debug, Clone)]
pub struct ListView {
    columns: usize,
    state: ListState,
}

#[derive(Serialize)]
struct TableContext<'a> {
    columns: usize,
    placeholder: Option<&'a str>,
    placeholder_class: &'static str,
    rows: &'a [RowView],
}

impl ListView {
    /// `columns` incluye la columna de acciones
    pub fn new(columns: usize) -> Self {
        Self { columns, state: ListState::Idle }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn set_loading(&mut self) {
        self.state = ListState::Loading;
    }

    pub fn set_rows(&mut self, rows: Vec<RowView>, empty_text: impl Into<String>) {
        self.state = if rows.is_empty() {
            ListState::Empty(empty_text.into())
        } else {
            ListState::Rows(rows)
        };
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.state = ListState::Error(text.into());
    }

    pub fn rows(&self) -> &[RowView] {
        match &self.state {
            ListState::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn row(&self, id: i64) -> Option<&RowView> {
        self.rows().iter().find(|row| row.id == id)
    }

    /// Texto del marcador que ocupa toda la tabla, si no hay filas
    pub fn placeholder(&self) -> Option<&str> {
        match &self.state {
            ListState::Idle | ListState::Rows(_) => None,
            ListState::Loading => Some(MSG_LOADING),
            ListState::Empty(text) | ListState::Error(text) => Some(text),
        }
    }

    pub fn render_html(&self) -> Result<String, ClientError> {
        let placeholder_class = match self.state {
            ListState::Error(_) => "muted error",
            _ => "muted",
        };
        templates::render(
            TABLE_BODY,
            &TableContext {
                columns: self.columns,
                placeholder: self.placeholder(),
                placeholder_class,
                rows: self.rows(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_placeholder() {
        let mut list = ListView::new(6);
        list.set_rows(vec![], "Nenhum veículo encontrado.");
        assert_eq!(list.state(), &ListState::Empty("Nenhum veículo encontrado.".to_string()));

        let html = list.render_html().unwrap();
        assert!(html.contains(r#"<td colspan="6" class="muted">Nenhum veículo encontrado.</td>"#));
    }

    #[test]
    fn test_loading_and_error() {
        let mut list = ListView::new(3);
        list.set_loading();
        assert_eq!(list.placeholder(), Some(MSG_LOADING));

        list.set_error("Erro ao carregar veículos.");
        assert!(list.rows().is_empty());
        let html = list.render_html().unwrap();
        assert!(html.contains(r#"class="muted error">Erro ao carregar veículos.<"#));
    }

    #[test]
    fn test_rows_in_order_with_actions() {
        let mut list = ListView::new(3);
        list.set_rows(
            vec![
                RowView::new(2, "ABC1D23", vec!["ABC1D23".into(), "Fiat".into()]).with_actions(true, true),
                RowView::new(1, "<XYZ>", vec!["<XYZ>".into(), "VW".into()]),
            ],
            "vazio",
        );

        let html = list.render_html().unwrap();
        let first = html.find(r#"data-id="2""#).unwrap();
        let second = html.find(r#"<tr data-id="1""#).unwrap();
        assert!(first < second);
        assert!(html.contains(r#"<button class="btn-delete" data-id="2" data-label="ABC1D23">Excluir</button>"#));
        assert!(html.contains("<td>&lt;XYZ&gt;</td>"));
        assert_eq!(list.row(1).map(|row| row.label.as_str()), Some("<XYZ>"));
    }
}
