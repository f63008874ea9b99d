//! Modal de edición / confirmación
//!
//! `Closed → Open(payload) → Closed`. Escape y el clic en el fondo no hacen
//! nada si el modal ya está cerrado.

use super::Message;

/// Motivo por el que se cierra un modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Cancel,
    Backdrop,
    Escape,
    Success,
}

/// Modal con su payload (formulario de edición o registro a borrar)
#[derive(Debug, Clone)]
pub struct Modal<P> {
    payload: Option<P>,
    message: Option<Message>,
}

impl<P> Default for Modal<P> {
    fn default() -> Self {
        Self { payload: None, message: None }
    }
}

impl<P> Modal<P> {
    pub fn open(&mut self, payload: P) {
        self.payload = Some(payload);
        self.message = None;
    }

    /// Cerrar; devuelve el payload si estaba abierto
    pub fn close(&mut self, reason: CloseReason) -> Option<P> {
        let payload = self.payload.take();
        if payload.is_some() {
            tracing::debug!("🪟 Modal cerrado ({:?})", reason);
        }
        self.message = None;
        payload
    }

    pub fn is_open(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn payload_mut(&mut self) -> Option<&mut P> {
        self.payload.as_mut()
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Mensaje dentro del modal; se ignora si está cerrado
    pub fn set_message(&mut self, message: Message) {
        if self.is_open() {
            self.message = Some(message);
        }
    }
}

/// Registro seleccionado para borrar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: i64,
    pub label: String,
}
