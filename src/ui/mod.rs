//! Estado de la vista
//!
//! Piezas compartidas por todas las páginas: mensajes en línea, modales,
//! el estado de la tabla, el planificador de acciones diferidas y las
//! plantillas HTML.

pub mod list;
pub mod modal;
pub mod scheduler;
pub mod templates;

pub use list::*;
pub use modal::*;
pub use scheduler::*;

/// Tono del mensaje en línea (se traduce a clases CSS)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Muted,
    Error,
    Success,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Muted => "muted",
            Tone::Error => "muted error",
            Tone::Success => "muted success",
        }
    }
}

/// Mensaje en línea de una página o de un modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub tone: Tone,
}

impl Message {
    pub fn muted(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Muted }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Error }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), tone: Tone::Success }
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}
