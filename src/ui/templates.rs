//! Plantillas HTML embebidas en el binario
//!
//! Los nombres terminan en `.html`, así que Tera escapa todas las variables.

use lazy_static::lazy_static;
use serde::Serialize;
use tera::{Context, Tera};

use crate::utils::errors::ClientError;

pub const TABLE_BODY: &str = "table_body.html";
pub const SELECT_OPTIONS: &str = "select_options.html";

lazy_static! {
    static ref TEMPLATES: Tera = load_templates();
}

fn load_templates() -> Tera {
    let mut tera = Tera::default();
    if let Err(e) = tera.add_raw_templates(vec![
        (TABLE_BODY, include_str!("../templates/table_body.html")),
        (SELECT_OPTIONS, include_str!("../templates/select_options.html")),
    ]) {
        // render() devolverá TemplateNotFound con el nombre
        tracing::error!("❌ No se pudieron cargar las plantillas: {}", e);
    }
    tera
}

/// Opción de un `<select>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
            disabled: false,
            selected: false,
        }
    }

    /// Primera opción vacía ("Selecione...")
    pub fn prompt(label: impl Into<String>) -> Self {
        Self { selected: true, ..Self::new("", label) }
    }

    /// Opción informativa que no se puede elegir
    pub fn notice(label: impl Into<String>) -> Self {
        Self { disabled: true, ..Self::new("", label) }
    }
}

/// Renderizar una plantilla con un contexto serializable
pub fn render<T: Serialize>(name: &str, data: &T) -> Result<String, ClientError> {
    let context = Context::from_serialize(data)?;
    Ok(TEMPLATES.render(name, &context)?)
}

pub fn render_options(options: &[SelectOption]) -> Result<String, ClientError> {
    #[derive(Serialize)]
    struct OptionsContext<'a> {
        options: &'a [SelectOption],
    }
    render(SELECT_OPTIONS, &OptionsContext { options })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_are_escaped() {
        let html = render_options(&[
            SelectOption::prompt("Selecione um veículo"),
            SelectOption::new(3, "ABC1D23 - <Fiat> Uno"),
            SelectOption::notice("Nenhum plano cadastrado"),
        ])
        .unwrap();

        assert!(html.contains(r#"<option value="" selected>Selecione um veículo</option>"#));
        assert!(html.contains(r#"<option value="3">ABC1D23 - &lt;Fiat&gt; Uno</option>"#));
        assert!(html.contains(r#"<option value="" disabled>Nenhum plano cadastrado</option>"#));
    }
}
