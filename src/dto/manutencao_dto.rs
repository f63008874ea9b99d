use chrono::NaiveDate;
use serde::Serialize;
use validator::{Validate, ValidationError};

use super::{check_rules, or_message, require_all, FormInput};
use crate::models::Manutencao;
use crate::utils::validation::{
    optional, optional_text, parse_decimal, parse_int, validate_date, validate_positive,
};

const MSG_OBRIGATORIOS: &str = "Preencha todos os campos obrigatórios";

/// Request para registrar un mantenimiento
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateManutencaoRequest {
    pub veiculo_id: i64,
    pub data: NaiveDate,
    pub km: i64,
    #[validate(length(max = 100, message = "Tipo de manutenção muito longo"))]
    pub tipo_manutencao: String,
    pub descricao: Option<String>,
    pub custo: Option<f64>,
    pub prestador_servico: Option<String>,
}

/// Request para actualizar un mantenimiento
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateManutencaoRequest {
    pub placa: String,
    pub data: NaiveDate,
    pub km: i64,
    #[validate(length(max = 100, message = "Tipo de manutenção muito longo"))]
    pub tipo_manutencao: String,
    #[validate(length(max = 150, message = "Prestador muito longo"))]
    pub prestador_servico: String,
    pub custo: f64,
    pub observacoes: Option<String>,
}

fn parse_data(value: &str) -> Result<NaiveDate, ValidationError> {
    or_message(validate_date(value), "Data inválida (use AAAA-MM-DD)")
}

fn parse_km(value: &str) -> Result<i64, ValidationError> {
    let km = or_message(parse_int(value), "A quilometragem deve ser um número inteiro")?;
    or_message(validate_positive(km), "A quilometragem deve ser maior que zero")?;
    Ok(km)
}

fn parse_custo(value: &str) -> Result<f64, ValidationError> {
    let custo = or_message(parse_decimal(value), "O custo deve ser um número válido")?;
    or_message(validate_positive(custo), "O custo deve ser maior que zero")?;
    Ok(custo)
}

/// Formulario de registro de mantenimiento
#[derive(Debug, Clone, Default)]
pub struct ManutencaoForm {
    pub veiculo_id: String,
    pub data: String,
    pub km: String,
    pub tipo_manutencao: String,
    pub custo: String,
    pub prestador_servico: String,
    pub descricao: String,
}

impl FormInput for ManutencaoForm {
    type Payload = CreateManutencaoRequest;

    fn validate(&self) -> Result<CreateManutencaoRequest, ValidationError> {
        require_all(&[&self.veiculo_id, &self.data, &self.km, &self.tipo_manutencao], MSG_OBRIGATORIOS)?;

        let veiculo_id = or_message(parse_int(&self.veiculo_id), "Selecione um veículo válido")?;
        or_message(validate_positive(veiculo_id), "Selecione um veículo válido")?;

        let request = CreateManutencaoRequest {
            veiculo_id,
            data: parse_data(&self.data)?,
            km: parse_km(&self.km)?,
            tipo_manutencao: self.tipo_manutencao.trim().to_string(),
            descricao: optional_text(&self.descricao),
            custo: optional(&self.custo, parse_custo)?,
            prestador_servico: optional_text(&self.prestador_servico),
        };
        check_rules(request, &["tipo_manutencao"])
    }
}

/// Formulario del modal de edición de mantenimiento
#[derive(Debug, Clone, Default)]
pub struct ManutencaoEditForm {
    pub id: i64,
    pub placa: String,
    pub data: String,
    pub km: String,
    pub tipo_manutencao: String,
    pub prestador_servico: String,
    pub custo: String,
    pub observacoes: String,
}

impl From<&Manutencao> for ManutencaoEditForm {
    fn from(m: &Manutencao) -> Self {
        Self {
            id: m.id,
            placa: m.placa.clone().unwrap_or_default(),
            data: m.data.clone().unwrap_or_default(),
            km: m.km.map(|km| km.to_string()).unwrap_or_default(),
            tipo_manutencao: m.tipo_manutencao.clone().unwrap_or_default(),
            prestador_servico: m.prestador_servico.clone().unwrap_or_default(),
            custo: m.custo.map(|c| c.to_string()).unwrap_or_default(),
            observacoes: m.observacoes.clone().unwrap_or_default(),
        }
    }
}

impl FormInput for ManutencaoEditForm {
    type Payload = UpdateManutencaoRequest;

    fn validate(&self) -> Result<UpdateManutencaoRequest, ValidationError> {
        require_all(
            &[
                &self.placa,
                &self.data,
                &self.km,
                &self.tipo_manutencao,
                &self.prestador_servico,
                &self.custo,
            ],
            MSG_OBRIGATORIOS,
        )?;

        let request = UpdateManutencaoRequest {
            placa: self.placa.trim().to_string(),
            data: parse_data(&self.data)?,
            km: parse_km(&self.km)?,
            tipo_manutencao: self.tipo_manutencao.trim().to_string(),
            prestador_servico: self.prestador_servico.trim().to_string(),
            custo: parse_custo(&self.custo)?,
            observacoes: optional_text(&self.observacoes),
        };
        check_rules(request, &["tipo_manutencao", "prestador_servico"])
    }
}
