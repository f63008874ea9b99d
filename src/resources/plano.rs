use validator::ValidationError;

use crate::dto::{FormInput, PlanoForm, PlanoRequest};
use crate::models::Plano;
use crate::ui::RowView;
use crate::utils::format::{format_km_unit, or_dash};

use super::{Deletable, Editable, FilterMode, Resource};

/// Planes del usuario actual, filtrados por nombre en el cliente
pub struct Planos;

impl Resource for Planos {
    type Record = Plano;
    type CreateForm = PlanoForm;
    type EditForm = PlanoForm;

    const NAME: &'static str = "planos";
    const PATH: &'static str = "/planos/";
    const COLUMNS: usize = 6;
    const FILTER: FilterMode = FilterMode::Local;
    const USER_SCOPED: bool = true;

    const MSG_LOAD_ERROR: &'static str = "Erro ao carregar planos.";
    const MSG_CREATED: &'static str = "✅ Plano cadastrado com sucesso!";
    const CREATE_REDIRECT: Option<&'static str> = Some("/ui/planos");

    fn row(plano: &Plano) -> RowView {
        let dias = match plano.dias_intervalo {
            Some(dias) if dias != 0 => format!("{dias} dias"),
            _ => "-".to_string(),
        };
        RowView::new(
            plano.id,
            plano.nome.clone(),
            vec![
                plano.id.to_string(),
                plano.nome.clone(),
                or_dash(plano.descricao.as_deref()),
                format_km_unit(plano.km_intervalo),
                dias,
            ],
        )
        .with_actions(true, true)
    }

    fn empty_text(filtered: bool) -> &'static str {
        if filtered {
            "Nenhum plano encontrado com esse nome."
        } else {
            "Nenhum plano cadastrado."
        }
    }

    fn count_text(count: usize) -> String {
        format!("{count} plano(s) encontrado(s)")
    }

    fn matches(plano: &Plano, filter: &str) -> bool {
        plano.matches_nome(filter)
    }
}

impl Editable for Planos {
    type UpdatePayload = PlanoRequest;

    const MSG_UPDATED: &'static str = "✅ Plano atualizado com sucesso!";

    fn edit_form(plano: &Plano) -> PlanoForm {
        PlanoForm::from(plano)
    }

    fn edit_id(form: &PlanoForm) -> i64 {
        form.id
    }

    fn validate_edit(form: &PlanoForm) -> Result<PlanoRequest, ValidationError> {
        form.validate()
    }
}

impl Deletable for Planos {
    const MSG_DELETED: &'static str = "✅ Plano excluído com sucesso!";
}
