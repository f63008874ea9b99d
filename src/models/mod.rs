//! Modelos del sistema
//!
//! Registros que devuelve el backend, tal como llegan en JSON. El cliente
//! nunca los guarda: cada página vuelve a pedir la lista tras un cambio.

pub mod auth;
pub mod manutencao;
pub mod plano;
pub mod usuario;
pub mod veiculo;
pub mod veiculo_plano;

pub use auth::*;
pub use manutencao::*;
pub use plano::*;
pub use usuario::*;
pub use veiculo::*;
pub use veiculo_plano::*;
