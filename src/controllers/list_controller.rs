//! Controlador genérico de las páginas de listado
//!
//! Carga la colección, crea registros desde el formulario de la página y,
//! según el recurso, abre los modales de edición y de borrado. Toda la
//! vista vive en el controlador; el host la lee y la renderiza.

use std::time::Duration;

use serde_json::Value;

use crate::client::{with_query, ApiClient};
use crate::config::ClientConfig;
use crate::dto::FormInput;
use crate::resources::{Deletable, Editable, FilterMode, Resource};
use crate::ui::{CloseReason, DeleteTarget, ListView, Message, Modal, Scheduler, MSG_LOADING};
use crate::utils::errors::ClientError;
use crate::utils::validation::message_of;

pub const LOGIN_PATH: &str = "/ui/login";

/// Acciones que la página aplica cuando vence su retardo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    CloseEdit,
    CloseDelete,
    Navigate(String),
}

pub struct ListController<R: Resource> {
    api: ApiClient,
    success_delay: Duration,
    redirect_delay: Duration,
    list: ListView,
    message: Option<Message>,
    form: R::CreateForm,
    form_message: Option<Message>,
    filter: Option<String>,
    edit_modal: Modal<R::EditForm>,
    delete_modal: Modal<DeleteTarget>,
    navigation: Option<String>,
    scheduler: Scheduler<Deferred>,
    /// Hubo una mutación y la lista aún no se recargó
    reload_pending: bool,
}

impl<R: Resource> ListController<R> {
    pub fn new(api: ApiClient, config: &ClientConfig) -> Self {
        Self {
            api,
            success_delay: config.success_delay(),
            redirect_delay: config.redirect_delay(),
            list: ListView::new(R::COLUMNS),
            message: None,
            form: R::CreateForm::default(),
            form_message: None,
            filter: None,
            edit_modal: Modal::default(),
            delete_modal: Modal::default(),
            navigation: None,
            scheduler: Scheduler::new(),
            reload_pending: false,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn form(&self) -> &R::CreateForm {
        &self.form
    }

    pub fn form_message(&self) -> Option<&Message> {
        self.form_message.as_ref()
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn edit_modal(&self) -> &Modal<R::EditForm> {
        &self.edit_modal
    }

    pub fn delete_modal(&self) -> &Modal<DeleteTarget> {
        &self.delete_modal
    }

    /// Página a la que hay que ir, si alguna acción lo pidió
    pub fn navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }

    pub fn take_navigation(&mut self) -> Option<String> {
        self.navigation.take()
    }

    pub fn has_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Ruta de la colección; `?usuario_id=` si el recurso lo exige
    fn collection_path(&self, with_filter: bool) -> Result<String, ClientError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if R::USER_SCOPED {
            let user = self.api.session().current_user()?;
            params.push(("usuario_id", user.to_string()));
        }
        if let (true, FilterMode::Query(key), Some(filter)) = (with_filter, R::FILTER, self.filter.as_deref()) {
            params.push((key, filter.to_string()));
        }

        let params: Vec<(&str, &str)> = params.iter().map(|(key, value)| (*key, value.as_str())).collect();
        Ok(with_query(R::PATH, &params))
    }

    /// Sesión ausente o token ilegible: avisar y volver al login
    fn not_authenticated(&mut self, error: &ClientError) -> Message {
        tracing::warn!("🔒 {} sin sesión válida: {}", R::NAME, error);
        self.scheduler
            .schedule(self.redirect_delay, Deferred::Navigate(LOGIN_PATH.to_string()));
        Message::error(error.to_string())
    }

    /// Cargar la lista con el filtro actual
    pub async fn load(&mut self) {
        self.reload_pending = false;
        self.list.set_loading();
        self.message = Some(Message::muted(MSG_LOADING));

        let path = match self.collection_path(true) {
            Ok(path) => path,
            Err(e) => {
                self.list.set_error(e.to_string());
                self.message = Some(self.not_authenticated(&e));
                return;
            }
        };

        tracing::info!("📋 Cargando {} ({})", R::NAME, path);
        match self.api.get_json::<Vec<R::Record>>(&path).await {
            Ok(records) => {
                let local_filter = match (R::FILTER, self.filter.as_deref()) {
                    (FilterMode::Local, Some(filter)) => Some(filter),
                    _ => None,
                };
                let rows: Vec<_> = records
                    .iter()
                    .filter(|record| local_filter.map_or(true, |filter| R::matches(record, filter)))
                    .map(R::row)
                    .collect();

                let filtered = self.filter.is_some();
                self.message = Some(if rows.is_empty() {
                    Message::muted(R::empty_message(filtered))
                } else {
                    Message::success(R::count_text(rows.len()))
                });
                tracing::info!("✅ {} {} mostrados", rows.len(), R::NAME);
                self.list.set_rows(rows, R::empty_text(filtered));
            }
            Err(e) => {
                tracing::error!("❌ Error cargando {}: {}", R::NAME, e);
                self.list.set_error(R::MSG_LOAD_ERROR);
                self.message = Some(Message::error(e.to_string()));
            }
        }
    }

    /// Filtrar; un valor vacío equivale a quitar el filtro
    pub async fn apply_filter(&mut self, value: &str) {
        let value = value.trim();
        self.filter = (!value.is_empty()).then(|| value.to_string());
        self.load().await;
    }

    pub async fn clear_filter(&mut self) {
        self.filter = None;
        self.load().await;
    }

    /// Botón "Limpar": formulario vacío y sin mensaje
    pub fn clear_form(&mut self) {
        self.form = R::CreateForm::default();
        self.form_message = None;
    }

    /// Validar el formulario de alta y enviarlo
    pub async fn create(&mut self, form: R::CreateForm) {
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                self.form = form;
                self.form_message = Some(Message::error(message_of(&e)));
                return;
            }
        };
        self.form = form;

        let path = match self.collection_path(false) {
            Ok(path) => path,
            Err(e) => {
                self.form_message = Some(self.not_authenticated(&e));
                return;
            }
        };

        self.form_message = Some(Message::muted("Salvando..."));
        tracing::info!("📝 Creando registro en {}", R::NAME);
        match self.api.post_json::<_, Value>(&path, &payload).await {
            Ok(_) => {
                tracing::info!("✅ Registro creado en {}", R::NAME);
                self.form = R::CreateForm::default();
                self.form_message = Some(Message::success(R::MSG_CREATED));
                if let Some(redirect) = R::CREATE_REDIRECT {
                    self.scheduler
                        .schedule(self.success_delay, Deferred::Navigate(redirect.to_string()));
                }
                self.load().await;
            }
            Err(e) => {
                self.form_message = Some(Message::error(e.to_string()));
            }
        }
    }

    /// Abrir un modal cierra el otro y cancela la acción diferida pendiente.
    /// Si se cancela un cierre tras una mutación, la recarga queda pendiente
    /// para el próximo `poll`/`settle`.
    fn prepare_modal(&mut self) {
        if self.scheduler.cancel() && self.reload_pending {
            tracing::debug!("🔄 Cierre cancelado, recarga de {} pendiente", R::NAME);
        }
        self.edit_modal.close(CloseReason::CloseButton);
        self.delete_modal.close(CloseReason::CloseButton);
    }

    pub fn close_edit(&mut self, reason: CloseReason) {
        self.edit_modal.close(reason);
    }

    pub fn close_delete(&mut self, reason: CloseReason) {
        self.delete_modal.close(reason);
    }

    /// Escape cierra el modal abierto; sin modal no hace nada
    pub fn escape(&mut self) {
        self.close_edit(CloseReason::Escape);
        self.close_delete(CloseReason::Escape);
    }

    /// Clic fuera de la superficie del modal
    pub fn backdrop_click(&mut self) {
        self.close_edit(CloseReason::Backdrop);
        self.close_delete(CloseReason::Backdrop);
    }

    async fn apply(&mut self, command: Deferred) {
        match command {
            Deferred::CloseEdit => {
                self.edit_modal.close(CloseReason::Success);
                self.load().await;
            }
            Deferred::CloseDelete => {
                self.delete_modal.close(CloseReason::Success);
                self.load().await;
            }
            Deferred::Navigate(path) => {
                tracing::info!("➡️ Navegando a {}", path);
                self.navigation = Some(path);
            }
        }
    }

    /// Recargar si una mutación quedó sin su cierre diferido
    async fn reload_if_pending(&mut self) {
        if self.reload_pending && !self.scheduler.is_pending() {
            self.load().await;
        }
    }

    /// Aplicar las acciones diferidas que ya vencieron
    pub async fn poll(&mut self) {
        while let Some(command) = self.scheduler.try_fired() {
            self.apply(command).await;
        }
        self.reload_if_pending().await;
    }

    /// Esperar y aplicar todas las acciones diferidas pendientes
    pub async fn settle(&mut self) {
        while let Some(command) = self.scheduler.wait().await {
            self.apply(command).await;
        }
        self.reload_if_pending().await;
    }
}

impl<R: Editable> ListController<R> {
    /// Pedir el registro y abrir el modal de edición con sus datos
    pub async fn edit(&mut self, id: i64) {
        match self.api.get_json::<R::Record>(&R::item_path(id)).await {
            Ok(record) => {
                self.prepare_modal();
                self.reload_if_pending().await;
                self.edit_modal.open(R::edit_form(&record));
            }
            Err(e) => {
                tracing::error!("❌ Error cargando {} #{}: {}", R::NAME, id, e);
                self.message = Some(Message::error(format!("Erro ao carregar dados: {}", e.detail())));
            }
        }
    }

    /// Guardar el modal de edición (el modal sigue abierto si falla)
    pub async fn save(&mut self, form: R::EditForm) {
        if !self.edit_modal.is_open() || self.scheduler.is_pending() {
            return;
        }
        let payload = R::validate_edit(&form);
        let id = R::edit_id(&form);
        if let Some(current) = self.edit_modal.payload_mut() {
            *current = form;
        }

        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                self.edit_modal.set_message(Message::error(message_of(&e)));
                return;
            }
        };

        self.edit_modal.set_message(Message::muted("Salvando..."));
        tracing::info!("✏️ Actualizando {} #{}", R::NAME, id);
        match self.api.put_json::<_, Value>(&R::item_path(id), &payload).await {
            Ok(_) => {
                self.edit_modal.set_message(Message::success(R::MSG_UPDATED));
                self.reload_pending = true;
                self.scheduler.schedule(self.success_delay, Deferred::CloseEdit);
            }
            Err(e) => {
                self.edit_modal.set_message(Message::error(e.to_string()));
            }
        }
    }
}

impl<R: Deletable> ListController<R> {
    /// Abrir la confirmación de borrado nombrando el registro
    pub fn request_delete(&mut self, id: i64, label: impl Into<String>) {
        self.prepare_modal();
        self.delete_modal.open(DeleteTarget { id, label: label.into() });
    }

    /// Confirmar: un único DELETE para el registro seleccionado
    pub async fn confirm_delete(&mut self) {
        if self.scheduler.is_pending() {
            return;
        }
        let Some(target) = self.delete_modal.payload().cloned() else {
            return;
        };

        self.delete_modal.set_message(Message::muted(R::MSG_DELETING));
        tracing::info!("🗑️ Borrando {} #{} ({})", R::NAME, target.id, target.label);
        match self.api.delete(&R::item_path(target.id)).await {
            Ok(status) => {
                tracing::info!("✅ {} #{} borrado ({})", R::NAME, target.id, status);
                self.delete_modal.set_message(Message::success(R::MSG_DELETED));
                self.reload_pending = true;
                self.scheduler.schedule(self.success_delay, Deferred::CloseDelete);
            }
            Err(e) => {
                self.delete_modal.set_message(Message::error(e.to_string()));
            }
        }
    }
}
