//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! el token de sesión y el formato de los valores mostrados.

pub mod errors;
pub mod format;
pub mod token;
pub mod validation;
