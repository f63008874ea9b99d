//! Controladores de las páginas
//!
//! Un controlador por página; cada uno guarda su propio estado de vista y
//! no depende de ninguna otra página.

pub mod auth_controller;
pub mod list_controller;
pub mod nav_controller;
pub mod veiculo_plano_controller;

pub use auth_controller::{LoginController, RegistroController};
pub use list_controller::{Deferred, ListController};
pub use nav_controller::NavController;
pub use veiculo_plano_controller::VeiculoPlanoController;

use crate::resources::{Manutencoes, Planos, Usuarios, Veiculos};

pub type UsuariosController = ListController<Usuarios>;
pub type VeiculosController = ListController<Veiculos>;
pub type ManutencoesController = ListController<Manutencoes>;
pub type PlanosController = ListController<Planos>;
