use serde::Serialize;
use validator::{Validate, ValidationError};

use super::{check_rules, or_message, require_all, FormInput};
use crate::utils::validation::validate_length;

const MAX_NOME: usize = 100;

fn validate_nome_maximo(nome: &str) -> Result<(), ValidationError> {
    or_message(
        validate_length(nome, 0, MAX_NOME),
        "O nome deve ter no máximo 100 caracteres",
    )
}

/// Request para crear un usuario desde la página de usuarios
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateUsuarioRequest {
    #[validate(
        length(min = 3, message = "O nome deve ter pelo menos 3 caracteres"),
        custom = "validate_nome_maximo"
    )]
    pub nome: String,

    #[validate(email(message = "E-mail inválido"))]
    pub email: String,

    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres"))]
    pub senha: String,
}

/// Formulario de alta de usuario
#[derive(Debug, Clone, Default)]
pub struct UsuarioForm {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

impl FormInput for UsuarioForm {
    type Payload = CreateUsuarioRequest;

    fn validate(&self) -> Result<CreateUsuarioRequest, ValidationError> {
        require_all(&[&self.nome, &self.email, &self.senha], "Todos os campos são obrigatórios")?;

        let request = CreateUsuarioRequest {
            nome: self.nome.trim().to_string(),
            email: self.email.trim().to_string(),
            senha: self.senha.clone(),
        };
        check_rules(request, &["nome", "email", "senha"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::message_of;

    #[test]
    fn test_usuario_form() {
        let mut form = UsuarioForm {
            nome: "Jo".to_string(),
            email: "invalido".to_string(),
            senha: "123".to_string(),
        };
        // el nombre se revisa primero
        assert_eq!(message_of(&form.validate().unwrap_err()), "O nome deve ter pelo menos 3 caracteres");

        form.nome = "João".to_string();
        assert_eq!(message_of(&form.validate().unwrap_err()), "E-mail inválido");

        form.email = "joao@frota.com".to_string();
        form.senha = "segredo".to_string();
        let payload = form.validate().unwrap();
        assert_eq!(payload.nome, "João");
    }

    #[test]
    fn test_usuario_form_long_values() {
        let mut form = UsuarioForm {
            nome: "J".repeat(101),
            email: "joao@frota.com".to_string(),
            senha: "segredo".to_string(),
        };
        assert_eq!(message_of(&form.validate().unwrap_err()), "O nome deve ter no máximo 100 caracteres");

        // la senha no tiene límite superior
        form.nome = "João".to_string();
        form.senha = "a".repeat(101);
        let payload = form.validate().unwrap();
        assert_eq!(payload.senha.len(), 101);
    }

    #[test]
    fn test_usuario_form_required() {
        let err = UsuarioForm::default().validate().unwrap_err();
        assert_eq!(message_of(&err), "Todos os campos são obrigatórios");
    }
}
