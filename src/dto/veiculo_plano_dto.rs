use chrono::NaiveDate;
use serde::Serialize;
use validator::ValidationError;

use super::{or_message, require_all, FormInput};
use crate::utils::validation::{optional, parse_int, validate_date, validate_positive};

const MSG_SELECIONE: &str = "⚠️ Selecione um veículo e um plano";

/// Request para asociar un plan a un vehículo
#[derive(Debug, Clone, Serialize)]
pub struct CreateVeiculoPlanoRequest {
    pub veiculo_id: i64,
    pub plano_id: i64,
    pub proxima_data: Option<NaiveDate>,
    pub proximo_km: Option<i64>,
}

/// Formulario de asociación (los ids vienen de los `<select>`)
#[derive(Debug, Clone, Default)]
pub struct VeiculoPlanoForm {
    pub veiculo_id: String,
    pub plano_id: String,
    pub proxima_data: String,
    pub proximo_km: String,
}

impl FormInput for VeiculoPlanoForm {
    type Payload = CreateVeiculoPlanoRequest;

    fn validate(&self) -> Result<CreateVeiculoPlanoRequest, ValidationError> {
        require_all(&[&self.veiculo_id, &self.plano_id], MSG_SELECIONE)?;

        let veiculo_id = or_message(parse_int(&self.veiculo_id), MSG_SELECIONE)?;
        let plano_id = or_message(parse_int(&self.plano_id), MSG_SELECIONE)?;

        let proxima_data = optional(&self.proxima_data, |value| {
            or_message(validate_date(value), "⚠️ Data inválida (use AAAA-MM-DD)")
        })?;
        let proximo_km = optional(&self.proximo_km, |value| {
            let km = or_message(parse_int(value), "⚠️ O próximo km deve ser um número inteiro")?;
            or_message(validate_positive(km), "⚠️ O próximo km deve ser maior que zero")?;
            Ok(km)
        })?;

        Ok(CreateVeiculoPlanoRequest {
            veiculo_id,
            plano_id,
            proxima_data,
            proximo_km,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::message_of;

    #[test]
    fn test_requires_both_selects() {
        let form = VeiculoPlanoForm {
            veiculo_id: "1".to_string(),
            ..VeiculoPlanoForm::default()
        };
        assert_eq!(message_of(&form.validate().unwrap_err()), MSG_SELECIONE);
    }

    #[test]
    fn test_optional_fields() {
        let form = VeiculoPlanoForm {
            veiculo_id: "1".to_string(),
            plano_id: "2".to_string(),
            proxima_data: "2025-01-31".to_string(),
            proximo_km: String::new(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.proximo_km, None);
        assert_eq!(payload.proxima_data, NaiveDate::from_ymd_opt(2025, 1, 31));
    }
}
