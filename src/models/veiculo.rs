use serde::{Deserialize, Serialize};

/// Vehículo de la flota
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Veiculo {
    pub id: i64,
    pub placa: String,
    #[serde(default)]
    pub marca: Option<String>,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default)]
    pub ano: Option<i32>,
    #[serde(default)]
    pub km_atual: Option<i64>,
    #[serde(default)]
    pub usuario_id: Option<i64>,
}

impl Veiculo {
    /// Texto de la opción en los `<select>`: "ABC1D23 - Fiat Uno"
    pub fn option_label(&self) -> String {
        let descricao = [self.marca.as_deref(), self.modelo.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if descricao.is_empty() {
            self.placa.clone()
        } else {
            format!("{} - {}", self.placa, descricao)
        }
    }
}
