use serde::Serialize;
use validator::{Validate, ValidationError};

use super::{check_rules, or_message, FormInput};
use crate::models::Plano;
use crate::utils::validation::{
    optional, optional_text, parse_int, validate_length, validate_positive, with_message,
};

const MAX_NOME: usize = 100;

fn validate_nome_maximo(nome: &str) -> Result<(), ValidationError> {
    or_message(
        validate_length(nome, 0, MAX_NOME),
        "⚠️ O nome deve ter no máximo 100 caracteres",
    )
}

/// Request de plan (alta y edición usan el mismo cuerpo)
#[derive(Debug, Clone, Serialize, Validate)]
pub struct PlanoRequest {
    #[validate(
        length(min = 3, message = "⚠️ O nome deve ter pelo menos 3 caracteres"),
        custom = "validate_nome_maximo"
    )]
    pub nome: String,
    pub descricao: Option<String>,
    pub km_intervalo: Option<i64>,
    pub dias_intervalo: Option<i64>,
}

fn parse_intervalo(value: &str) -> Result<i64, ValidationError> {
    let intervalo = or_message(parse_int(value), "⚠️ O intervalo deve ser um número inteiro")?;
    or_message(validate_positive(intervalo), "⚠️ O intervalo deve ser maior que zero")?;
    Ok(intervalo)
}

/// Formulario de plan, usado en la página de alta y en el modal de edición
#[derive(Debug, Clone, Default)]
pub struct PlanoForm {
    /// 0 en el formulario de alta
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    pub km_intervalo: String,
    pub dias_intervalo: String,
}

impl From<&Plano> for PlanoForm {
    fn from(plano: &Plano) -> Self {
        Self {
            id: plano.id,
            nome: plano.nome.clone(),
            descricao: plano.descricao.clone().unwrap_or_default(),
            km_intervalo: plano.km_intervalo.map(|km| km.to_string()).unwrap_or_default(),
            dias_intervalo: plano.dias_intervalo.map(|d| d.to_string()).unwrap_or_default(),
        }
    }
}

impl FormInput for PlanoForm {
    type Payload = PlanoRequest;

    fn validate(&self) -> Result<PlanoRequest, ValidationError> {
        let nome = self.nome.trim();
        if nome.chars().count() < 3 {
            return Err(with_message(
                ValidationError::new("length"),
                "⚠️ O nome deve ter pelo menos 3 caracteres",
            ));
        }
        if self.km_intervalo.trim().is_empty() && self.dias_intervalo.trim().is_empty() {
            return Err(with_message(
                ValidationError::new("intervalo"),
                "⚠️ Informe pelo menos um intervalo (KM ou Dias)",
            ));
        }

        let request = PlanoRequest {
            nome: nome.to_string(),
            descricao: optional_text(&self.descricao),
            km_intervalo: optional(&self.km_intervalo, parse_intervalo)?,
            dias_intervalo: optional(&self.dias_intervalo, parse_intervalo)?,
        };
        check_rules(request, &["nome"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::message_of;

    #[test]
    fn test_plano_requires_interval() {
        let form = PlanoForm {
            nome: "Revisão 10k".to_string(),
            ..PlanoForm::default()
        };
        assert_eq!(
            message_of(&form.validate().unwrap_err()),
            "⚠️ Informe pelo menos um intervalo (KM ou Dias)"
        );
    }

    #[test]
    fn test_plano_short_name() {
        let form = PlanoForm {
            nome: " ab ".to_string(),
            km_intervalo: "10000".to_string(),
            ..PlanoForm::default()
        };
        assert_eq!(
            message_of(&form.validate().unwrap_err()),
            "⚠️ O nome deve ter pelo menos 3 caracteres"
        );
    }

    #[test]
    fn test_plano_long_name() {
        let form = PlanoForm {
            nome: "P".repeat(101),
            km_intervalo: "1000".to_string(),
            ..PlanoForm::default()
        };
        assert_eq!(
            message_of(&form.validate().unwrap_err()),
            "⚠️ O nome deve ter no máximo 100 caracteres"
        );

        let form = PlanoForm {
            nome: "P".repeat(100),
            ..form
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_plano_payload() {
        let form = PlanoForm {
            nome: "Revisão semestral".to_string(),
            dias_intervalo: "180".to_string(),
            ..PlanoForm::default()
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.km_intervalo, None);
        assert_eq!(payload.dias_intervalo, Some(180));
        assert_eq!(payload.descricao, None);

        let form = PlanoForm {
            km_intervalo: "0".to_string(),
            ..form
        };
        assert_eq!(message_of(&form.validate().unwrap_err()), "⚠️ O intervalo deve ser maior que zero");
    }
}
