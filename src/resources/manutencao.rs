use validator::ValidationError;

use crate::dto::{FormInput, ManutencaoEditForm, ManutencaoForm, UpdateManutencaoRequest};
use crate::models::Manutencao;
use crate::ui::RowView;
use crate::utils::format::{format_brl, format_date, format_km, or_dash};

use super::{Deletable, Editable, FilterMode, Resource};

/// Registros de mantenimiento, filtrados por placa en el backend
pub struct Manutencoes;

impl Resource for Manutencoes {
    type Record = Manutencao;
    type CreateForm = ManutencaoForm;
    type EditForm = ManutencaoEditForm;

    const NAME: &'static str = "manutenções";
    const PATH: &'static str = "/manutencoes/";
    const COLUMNS: usize = 8;
    const FILTER: FilterMode = FilterMode::Query("placa");

    const MSG_LOAD_ERROR: &'static str = "Erro ao carregar manutenções.";
    const MSG_CREATED: &'static str = "Manutenção registrada com sucesso";

    fn row(m: &Manutencao) -> RowView {
        let placa = or_dash(m.placa.as_deref());
        let data = format_date(m.data.as_deref());
        RowView::new(
            m.id,
            format!("{placa} em {data}"),
            vec![
                m.id.to_string(),
                placa,
                data,
                format_km(m.km),
                or_dash(m.tipo_manutencao.as_deref()),
                or_dash(m.prestador_servico.as_deref()),
                format_brl(m.custo),
            ],
        )
        .with_actions(true, true)
    }

    fn empty_text(_filtered: bool) -> &'static str {
        "Nenhuma manutenção encontrada."
    }

    fn count_text(count: usize) -> String {
        format!("{count} manutenção(ões) encontrada(s)")
    }
}

impl Editable for Manutencoes {
    type UpdatePayload = UpdateManutencaoRequest;

    const MSG_UPDATED: &'static str = "Manutenção atualizada com sucesso!";

    fn edit_form(m: &Manutencao) -> ManutencaoEditForm {
        ManutencaoEditForm::from(m)
    }

    fn edit_id(form: &ManutencaoEditForm) -> i64 {
        form.id
    }

    fn validate_edit(form: &ManutencaoEditForm) -> Result<UpdateManutencaoRequest, ValidationError> {
        form.validate()
    }
}

impl Deletable for Manutencoes {
    const MSG_DELETED: &'static str = "Manutenção excluída com sucesso!";
}
