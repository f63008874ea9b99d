//! Configuración del cliente
//!
//! Variables de entorno (cargadas con dotenvy desde el binario).

pub mod environment;

pub use environment::*;
