//! Recursos del backend
//!
//! Cada página de listado trabaja sobre un recurso: la ruta de la
//! colección, cómo se filtra, cómo se muestra cada registro y los textos de
//! la página. Las operaciones opcionales (editar, borrar) son traits aparte;
//! el controlador solo las ofrece si el recurso las implementa.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::ValidationError;

use crate::dto::FormInput;
use crate::ui::RowView;

pub mod manutencao;
pub mod plano;
pub mod usuario;
pub mod veiculo;
pub mod veiculo_plano;

pub use manutencao::Manutencoes;
pub use plano::Planos;
pub use usuario::Usuarios;
pub use veiculo::Veiculos;
pub use veiculo_plano::VeiculosPlanos;

/// Cómo se aplica el filtro de la página
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// La página no tiene filtro
    None,
    /// El backend filtra por este parámetro de query (`?placa=`)
    Query(&'static str),
    /// Se filtra en el cliente tras recibir la lista
    Local,
}

/// Recurso listable y creable
pub trait Resource: Send + Sync + 'static {
    type Record: DeserializeOwned + Clone + Debug + Send + Sync;
    type CreateForm: FormInput;
    /// Formulario del modal de edición (`()` si no se edita)
    type EditForm: Clone + Debug + Send + Sync;

    /// Nombre para los logs
    const NAME: &'static str;
    /// Ruta de la colección, con la barra final
    const PATH: &'static str;
    /// Columnas de la tabla, incluida la de acciones
    const COLUMNS: usize;
    const FILTER: FilterMode = FilterMode::None;
    /// Las peticiones de la colección llevan `?usuario_id=<sub>`
    const USER_SCOPED: bool = false;

    const MSG_LOAD_ERROR: &'static str;
    const MSG_CREATED: &'static str;
    /// Página a la que se va tras crear (después del retardo de éxito)
    const CREATE_REDIRECT: Option<&'static str> = None;

    fn row(record: &Self::Record) -> RowView;

    /// Texto de la tabla vacía
    fn empty_text(filtered: bool) -> &'static str;

    /// Mensaje de la página con la tabla vacía
    fn empty_message(filtered: bool) -> &'static str {
        Self::empty_text(filtered)
    }

    fn count_text(count: usize) -> String;

    /// Filtro local (`FilterMode::Local`)
    fn matches(_record: &Self::Record, _filter: &str) -> bool {
        true
    }

    fn item_path(id: i64) -> String {
        format!("{}{}", Self::PATH, id)
    }
}

/// Recurso con modal de edición (`GET` + `PUT /{id}`)
pub trait Editable: Resource {
    type UpdatePayload: Serialize + Debug + Send + Sync;

    const MSG_UPDATED: &'static str;

    fn edit_form(record: &Self::Record) -> Self::EditForm;
    fn edit_id(form: &Self::EditForm) -> i64;
    fn validate_edit(form: &Self::EditForm) -> Result<Self::UpdatePayload, ValidationError>;
}

/// Recurso con confirmación de borrado (`DELETE /{id}`)
pub trait Deletable: Resource {
    const MSG_DELETED: &'static str;
    const MSG_DELETING: &'static str = "Excluindo...";
}
