//! Formularios y payloads
//!
//! Cada formulario guarda los valores tal como se escriben (texto) y se
//! valida localmente antes de producir el payload que se envía. Si la
//! validación falla no sale ninguna petición.

use std::fmt::Debug;

use serde::Serialize;
use validator::{Validate, ValidationError};

use crate::utils::validation::{first_message, with_message};

pub mod auth_dto;
pub mod manutencao_dto;
pub mod plano_dto;
pub mod usuario_dto;
pub mod veiculo_dto;
pub mod veiculo_plano_dto;

pub use auth_dto::*;
pub use manutencao_dto::*;
pub use plano_dto::*;
pub use usuario_dto::*;
pub use veiculo_dto::*;
pub use veiculo_plano_dto::*;

/// Formulario de una página
pub trait FormInput: Clone + Default + Debug + Send + Sync {
    type Payload: Serialize + Debug + Send + Sync;

    /// Validar en orden; el primer fallo lleva el mensaje a mostrar
    fn validate(&self) -> Result<Self::Payload, ValidationError>;
}

/// Todos los campos deben tener algo distinto de espacios
pub(crate) fn require_all<S: AsRef<str>>(values: &[S], message: &'static str) -> Result<(), ValidationError> {
    if values.iter().any(|value| value.as_ref().trim().is_empty()) {
        return Err(with_message(ValidationError::new("required"), message));
    }
    Ok(())
}

/// Adjuntar el mensaje de la página a un error de los helpers de validación
pub(crate) fn or_message<T>(
    result: Result<T, ValidationError>,
    message: &'static str,
) -> Result<T, ValidationError> {
    result.map_err(|error| with_message(error, message))
}

/// Reglas declarativas del payload (`#[derive(Validate)]`), en el orden dado
pub(crate) fn check_rules<P: Validate>(payload: P, order: &[&str]) -> Result<P, ValidationError> {
    match payload.validate() {
        Ok(()) => Ok(payload),
        Err(errors) => {
            let message = first_message(&errors, order).unwrap_or_else(|| "Dados inválidos".to_string());
            Err(with_message(ValidationError::new("rules"), message))
        }
    }
}
