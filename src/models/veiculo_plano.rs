use serde::{Deserialize, Serialize};

/// Asociación de un vehículo a un plan con el próximo vencimiento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VeiculoPlano {
    pub id: i64,
    pub veiculo_id: i64,
    pub plano_id: i64,
    #[serde(default)]
    pub veiculo_placa: Option<String>,
    #[serde(default)]
    pub veiculo_modelo: Option<String>,
    #[serde(default)]
    pub plano_nome: Option<String>,
    #[serde(default)]
    pub proxima_data: Option<String>,
    #[serde(default)]
    pub proximo_km: Option<i64>,
}
