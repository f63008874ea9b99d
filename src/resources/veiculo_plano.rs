use crate::dto::VeiculoPlanoForm;
use crate::models::VeiculoPlano;
use crate::ui::RowView;
use crate::utils::format::{format_date, format_km_unit, or_dash};

use super::{Deletable, Resource};

/// Asociaciones vehículo-plan: listado, alta y borrado
pub struct VeiculosPlanos;

impl Resource for VeiculosPlanos {
    type Record = VeiculoPlano;
    type CreateForm = VeiculoPlanoForm;
    type EditForm = ();

    const NAME: &'static str = "associações";
    const PATH: &'static str = "/veiculos-planos/";
    const COLUMNS: usize = 5;

    const MSG_LOAD_ERROR: &'static str = "Erro ao carregar associações.";
    const MSG_CREATED: &'static str = "✅ Plano associado com sucesso!";

    fn row(a: &VeiculoPlano) -> RowView {
        let placa = or_dash(a.veiculo_placa.as_deref());
        let veiculo = match a.veiculo_modelo.as_deref().filter(|m| !m.is_empty()) {
            Some(modelo) => format!("{placa} ({modelo})"),
            None => placa,
        };
        let plano = or_dash(a.plano_nome.as_deref());
        RowView::new(
            a.id,
            format!("{veiculo} - {plano}"),
            vec![
                veiculo,
                plano,
                format_date(a.proxima_data.as_deref()),
                format_km_unit(a.proximo_km),
            ],
        )
        .with_actions(false, true)
    }

    fn empty_text(_filtered: bool) -> &'static str {
        "Nenhuma associação encontrada"
    }

    fn empty_message(_filtered: bool) -> &'static str {
        "Nenhum plano associado aos veículos"
    }

    fn count_text(count: usize) -> String {
        format!("{count} associação(ões) encontrada(s)")
    }
}

impl Deletable for VeiculosPlanos {
    const MSG_DELETED: &'static str = "✅ Associação removida!";
    const MSG_DELETING: &'static str = "Removendo...";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row() {
        let a: VeiculoPlano = serde_json::from_str(
            r#"{"id": 2, "veiculo_id": 1, "plano_id": 5, "veiculo_placa": "ABC1D23",
                "veiculo_modelo": "Uno", "plano_nome": "Revisão", "proxima_data": "2025-01-31",
                "proximo_km": 95000}"#,
        )
        .unwrap();
        let row = VeiculosPlanos::row(&a);
        assert_eq!(row.cells, vec!["ABC1D23 (Uno)", "Revisão", "31/01/2025", "95.000 km"]);
        assert!(!row.can_edit && row.can_delete);
    }
}
