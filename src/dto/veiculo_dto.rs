use serde::Serialize;
use validator::{Validate, ValidationError};

use super::{check_rules, or_message, require_all, FormInput};
use crate::models::Veiculo;
use crate::utils::validation::{parse_int, validate_license_plate, validate_non_negative};

/// Request para crear un vehículo
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateVeiculoRequest {
    pub placa: String,

    #[validate(range(min = 1900, max = 2100, message = "O ano deve estar entre 1900 e 2100"))]
    pub ano: i64,

    #[validate(length(max = 100, message = "Marca muito longa"))]
    pub marca: String,

    #[validate(length(max = 100, message = "Modelo muito longo"))]
    pub modelo: String,

    pub km_atual: i64,
}

/// Request para actualizar un vehículo (la placa no se edita)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateVeiculoRequest {
    #[validate(length(max = 100, message = "Marca muito longa"))]
    pub marca: String,

    #[validate(length(max = 100, message = "Modelo muito longo"))]
    pub modelo: String,

    #[validate(range(min = 1900, max = 2100, message = "O ano deve estar entre 1900 e 2100"))]
    pub ano: i64,

    pub km_atual: i64,
}

fn parse_ano(value: &str) -> Result<i64, ValidationError> {
    or_message(parse_int(value), "O ano deve ser um número válido")
}

fn parse_km(value: &str) -> Result<i64, ValidationError> {
    let km = or_message(parse_int(value), "A quilometragem deve ser um número inteiro")?;
    or_message(validate_non_negative(km), "A quilometragem não pode ser negativa")?;
    Ok(km)
}

/// Formulario de alta de vehículo
#[derive(Debug, Clone, Default)]
pub struct VeiculoForm {
    pub placa: String,
    pub ano: String,
    pub marca: String,
    pub modelo: String,
    pub km_atual: String,
}

impl FormInput for VeiculoForm {
    type Payload = CreateVeiculoRequest;

    fn validate(&self) -> Result<CreateVeiculoRequest, ValidationError> {
        require_all(
            &[&self.placa, &self.ano, &self.marca, &self.modelo, &self.km_atual],
            "Por favor, preencha todos os campos.",
        )?;
        let placa = self.placa.trim().to_uppercase();
        or_message(validate_license_plate(&placa), "Placa inválida")?;

        let request = CreateVeiculoRequest {
            placa,
            ano: parse_ano(&self.ano)?,
            marca: self.marca.trim().to_string(),
            modelo: self.modelo.trim().to_string(),
            km_atual: parse_km(&self.km_atual)?,
        };
        check_rules(request, &["ano", "marca", "modelo"])
    }
}

/// Formulario del modal de edición de vehículo
#[derive(Debug, Clone, Default)]
pub struct VeiculoEditForm {
    pub id: i64,
    /// Solo lectura, se muestra en el modal
    pub placa: String,
    pub marca: String,
    pub modelo: String,
    pub ano: String,
    pub km_atual: String,
}

impl From<&Veiculo> for VeiculoEditForm {
    fn from(veiculo: &Veiculo) -> Self {
        Self {
            id: veiculo.id,
            placa: veiculo.placa.clone(),
            marca: veiculo.marca.clone().unwrap_or_default(),
            modelo: veiculo.modelo.clone().unwrap_or_default(),
            ano: veiculo.ano.map(|ano| ano.to_string()).unwrap_or_default(),
            km_atual: veiculo.km_atual.map(|km| km.to_string()).unwrap_or_default(),
        }
    }
}

impl FormInput for VeiculoEditForm {
    type Payload = UpdateVeiculoRequest;

    fn validate(&self) -> Result<UpdateVeiculoRequest, ValidationError> {
        require_all(
            &[&self.marca, &self.modelo, &self.ano, &self.km_atual],
            "Todos os campos são obrigatórios.",
        )?;

        let request = UpdateVeiculoRequest {
            marca: self.marca.trim().to_string(),
            modelo: self.modelo.trim().to_string(),
            ano: parse_ano(&self.ano)?,
            km_atual: parse_km(&self.km_atual)?,
        };
        check_rules(request, &["marca", "modelo", "ano"])
    }
}
