//! frota-admin
//!
//! Cliente de administración de la flota: controladores de página para
//! usuarios, vehículos, mantenimientos, planes y asociaciones vehículo-plan,
//! más login, registro y navegación.

pub mod client;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod models;
pub mod resources;
pub mod session;
pub mod ui;
pub mod utils;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use session::Session;
pub use utils::errors::ClientError;
