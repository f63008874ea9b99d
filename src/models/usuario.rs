use serde::{Deserialize, Serialize};

/// Usuario del sistema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
}
