use serde::Serialize;
use validator::ValidationError;

use super::{or_message, FormInput};
use crate::models::LoginRequest;
use crate::utils::validation::{validate_email, validate_length, with_message};

pub const MIN_SENHA: usize = 6;

/// Formulario de login
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub senha: String,
}

impl FormInput for LoginForm {
    type Payload = LoginRequest;

    fn validate(&self) -> Result<LoginRequest, ValidationError> {
        // la contraseña no se recorta: los espacios cuentan
        if self.email.is_empty() || self.senha.is_empty() {
            return Err(with_message(
                ValidationError::new("required"),
                "E-mail e senha são obrigatórios",
            ));
        }
        Ok(LoginRequest {
            email: self.email.clone(),
            senha: self.senha.clone(),
        })
    }
}

/// Payload de registro (también usado por `POST /usuarios/`)
#[derive(Debug, Clone, Serialize)]
pub struct RegistroRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

/// Formulario de registro
#[derive(Debug, Clone, Default)]
pub struct RegistroForm {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub confirmar_senha: String,
}

impl FormInput for RegistroForm {
    type Payload = RegistroRequest;

    fn validate(&self) -> Result<RegistroRequest, ValidationError> {
        let nome = self.nome.trim();
        let email = self.email.trim();

        if nome.is_empty() || email.is_empty() || self.senha.is_empty() || self.confirmar_senha.is_empty() {
            return Err(with_message(
                ValidationError::new("required"),
                "Todos os campos são obrigatórios",
            ));
        }
        or_message(validate_email(email), "E-mail inválido")?;
        or_message(
            validate_length(&self.senha, MIN_SENHA, usize::MAX),
            "A senha deve ter no mínimo 6 caracteres",
        )?;
        if self.senha != self.confirmar_senha {
            return Err(with_message(
                ValidationError::new("must_match"),
                "As senhas não coincidem",
            ));
        }

        Ok(RegistroRequest {
            nome: nome.to_string(),
            email: email.to_string(),
            senha: self.senha.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::message_of;

    fn registro(senha: &str, confirmar: &str) -> RegistroForm {
        RegistroForm {
            nome: "Ana Souza".to_string(),
            email: "ana@frota.com.br".to_string(),
            senha: senha.to_string(),
            confirmar_senha: confirmar.to_string(),
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm {
            email: "ana@frota.com.br".to_string(),
            senha: String::new(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(message_of(&err), "E-mail e senha são obrigatórios");
    }

    #[test]
    fn test_registro_password_mismatch() {
        let err = registro("abc123", "abc124").validate().unwrap_err();
        assert_eq!(message_of(&err), "As senhas não coincidem");
    }

    #[test]
    fn test_registro_matching_passwords() {
        let payload = registro("abc123", "abc123").validate().unwrap();
        assert_eq!(payload.senha, "abc123");
        assert_eq!(payload.email, "ana@frota.com.br");
    }

    #[test]
    fn test_registro_order_of_checks() {
        let mut form = registro("abc", "xyz");
        form.email = "sem-arroba".to_string();
        assert_eq!(message_of(&form.validate().unwrap_err()), "E-mail inválido");

        form.email = "ana@frota.com.br".to_string();
        assert_eq!(
            message_of(&form.validate().unwrap_err()),
            "A senha deve ter no mínimo 6 caracteres"
        );

        form.nome = "   ".to_string();
        assert_eq!(message_of(&form.validate().unwrap_err()), "Todos os campos são obrigatórios");
    }
}
