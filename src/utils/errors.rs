//! Sistema de manejo de errores
//!
//! Este módulo define los errores del cliente y la normalización de las
//! respuestas de error del backend (`{"detail": ...}`).

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errores principales del cliente
#[derive(Error, Debug)]
pub enum ClientError {
    /// Validación local: la petición nunca sale
    #[error("{0}")]
    Validation(String),

    /// Fallo de red (conexión rechazada, timeout, cuerpo ilegible)
    #[error("Erro de conexão com o servidor: {0}")]
    Network(#[from] reqwest::Error),

    /// El backend respondió con un status no 2xx
    #[error("Erro: {detail}")]
    Backend { status: StatusCode, detail: String },

    #[error("{0}")]
    NotAuthenticated(String),

    #[error("Resposta inválida do servidor: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Erro ao renderizar: {0}")]
    Template(#[from] tera::Error),

    #[error("Configuração inválida: {0}")]
    Config(String),
}

/// Cuerpo de error que devuelve el backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<Value>,
}

impl ClientError {
    /// Construir el error a partir de un status no 2xx y su cuerpo crudo.
    ///
    /// Un `detail` string se usa tal cual; cualquier otro `detail` se muestra
    /// como JSON; sin JSON legible se usa el texto del status HTTP.
    pub fn from_backend(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail)
            .map(|detail| match detail {
                Value::String(text) => text,
                other => other.to_string(),
            })
            .unwrap_or_else(|| status_text(status));

        ClientError::Backend { status, detail }
    }

    /// Texto que la página muestra después de su prefijo ("Erro: ...")
    pub fn detail(&self) -> String {
        match self {
            ClientError::Backend { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Backend { status, .. } => Some(*status),
            ClientError::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Solo fallos de transporte; un cuerpo 2xx ilegible es `Decode`
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}
