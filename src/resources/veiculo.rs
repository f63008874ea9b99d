use validator::ValidationError;

use crate::dto::{FormInput, UpdateVeiculoRequest, VeiculoEditForm, VeiculoForm};
use crate::models::Veiculo;
use crate::ui::RowView;
use crate::utils::format::{format_km, or_dash};

use super::{Deletable, Editable, FilterMode, Resource};

/// Vehículos, filtrados por placa en el backend
pub struct Veiculos;

impl Resource for Veiculos {
    type Record = Veiculo;
    type CreateForm = VeiculoForm;
    type EditForm = VeiculoEditForm;

    const NAME: &'static str = "veículos";
    const PATH: &'static str = "/veiculos/";
    const COLUMNS: usize = 7;
    const FILTER: FilterMode = FilterMode::Query("placa");

    const MSG_LOAD_ERROR: &'static str = "Erro ao carregar veículos.";
    const MSG_CREATED: &'static str = "Veículo cadastrado com sucesso!";

    fn row(veiculo: &Veiculo) -> RowView {
        RowView::new(
            veiculo.id,
            veiculo.placa.clone(),
            vec![
                veiculo.id.to_string(),
                veiculo.placa.clone(),
                or_dash(veiculo.marca.as_deref()),
                or_dash(veiculo.modelo.as_deref()),
                veiculo.ano.map_or_else(|| "-".to_string(), |ano| ano.to_string()),
                format_km(veiculo.km_atual),
            ],
        )
        .with_actions(true, true)
    }

    fn empty_text(_filtered: bool) -> &'static str {
        "Nenhum veículo encontrado."
    }

    fn count_text(count: usize) -> String {
        format!("{count} veículo(s) encontrado(s)")
    }
}

impl Editable for Veiculos {
    type UpdatePayload = UpdateVeiculoRequest;

    const MSG_UPDATED: &'static str = "Veículo atualizado com sucesso!";

    fn edit_form(veiculo: &Veiculo) -> VeiculoEditForm {
        VeiculoEditForm::from(veiculo)
    }

    fn edit_id(form: &VeiculoEditForm) -> i64 {
        form.id
    }

    fn validate_edit(form: &VeiculoEditForm) -> Result<UpdateVeiculoRequest, ValidationError> {
        form.validate()
    }
}

impl Deletable for Veiculos {
    const MSG_DELETED: &'static str = "Veículo excluído com sucesso!";
}
