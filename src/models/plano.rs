use serde::{Deserialize, Serialize};

/// Plan de mantenimiento: intervalo por km y/o por días
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plano {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub km_intervalo: Option<i64>,
    #[serde(default)]
    pub dias_intervalo: Option<i64>,
}

impl Plano {
    /// Filtro local por nombre, sin distinguir mayúsculas
    pub fn matches_nome(&self, filtro: &str) -> bool {
        self.nome.to_lowercase().contains(&filtro.to_lowercase())
    }
}
