use serde::{Deserialize, Serialize};

/// Registro de mantenimiento de un vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manutencao {
    pub id: i64,
    #[serde(default)]
    pub veiculo_id: Option<i64>,
    #[serde(default)]
    pub placa: Option<String>,
    /// Fecha ISO (YYYY-MM-DD)
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub km: Option<i64>,
    // versiones antiguas del backend mandan `tipo`
    #[serde(default, alias = "tipo")]
    pub tipo_manutencao: Option<String>,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default)]
    pub custo: Option<f64>,
    #[serde(default, alias = "prestador")]
    pub prestador_servico: Option<String>,
    #[serde(default)]
    pub observacoes: Option<String>,
}
