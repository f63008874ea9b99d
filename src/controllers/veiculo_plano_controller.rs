//! Página de asociaciones vehículo-plan
//!
//! Además de la lista, carga las opciones de los `<select>` de vehículo y de
//! plan. Los planes van acotados al usuario del token.

use crate::client::{with_query, ApiClient};
use crate::config::ClientConfig;
use crate::dto::VeiculoPlanoForm;
use crate::models::{Plano, Veiculo};
use crate::resources::{Planos, Resource, VeiculosPlanos};
use crate::session::Session;
use crate::ui::templates::{render_options, SelectOption};
use crate::utils::errors::ClientError;

use super::list_controller::ListController;

pub struct VeiculoPlanoController {
    page: ListController<VeiculosPlanos>,
    veiculo_options: Vec<SelectOption>,
    plano_options: Vec<SelectOption>,
}

async fn veiculo_options(api: &ApiClient) -> Vec<SelectOption> {
    match api.get_json::<Vec<Veiculo>>("/veiculos/").await {
        Ok(veiculos) => {
            let mut options = vec![SelectOption::prompt("Selecione um veículo")];
            if veiculos.is_empty() {
                options.push(SelectOption::notice("Nenhum veículo cadastrado"));
            }
            options.extend(veiculos.iter().map(|v| SelectOption::new(v.id, v.option_label())));
            options
        }
        Err(e) => {
            tracing::error!("❌ Error al cargar vehículos: {}", e);
            vec![SelectOption::new("", "Erro ao carregar veículos")]
        }
    }
}

fn planos_path(session: &Session) -> Result<String, ClientError> {
    let user = session.current_user()?.to_string();
    Ok(with_query(Planos::PATH, &[("usuario_id", user.as_str())]))
}

async fn plano_options(api: &ApiClient) -> Vec<SelectOption> {
    let path = match planos_path(api.session()) {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("🔒 Planes sin sesión válida: {}", e);
            let label = match api.session().access_token() {
                Some(_) => "Token inválido",
                None => "Faça login novamente",
            };
            return vec![SelectOption::new("", label)];
        }
    };

    match api.get_json::<Vec<Plano>>(&path).await {
        Ok(planos) => {
            let mut options = vec![SelectOption::prompt("Selecione um plano")];
            if planos.is_empty() {
                options.push(SelectOption::notice("Nenhum plano cadastrado"));
            }
            options.extend(planos.iter().map(|p| SelectOption::new(p.id, p.nome.clone())));
            options
        }
        Err(e) => {
            tracing::error!("❌ Error al cargar planes: {}", e);
            vec![SelectOption::new("", "Erro ao carregar planos")]
        }
    }
}

impl VeiculoPlanoController {
    pub fn new(api: ApiClient, config: &ClientConfig) -> Self {
        Self {
            page: ListController::new(api, config),
            veiculo_options: Vec::new(),
            plano_options: Vec::new(),
        }
    }

    /// Lista y listado de asociaciones
    pub fn page(&self) -> &ListController<VeiculosPlanos> {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut ListController<VeiculosPlanos> {
        &mut self.page
    }

    pub fn veiculo_options(&self) -> &[SelectOption] {
        &self.veiculo_options
    }

    pub fn plano_options(&self) -> &[SelectOption] {
        &self.plano_options
    }

    pub fn render_veiculo_options(&self) -> Result<String, ClientError> {
        render_options(&self.veiculo_options)
    }

    pub fn render_plano_options(&self) -> Result<String, ClientError> {
        render_options(&self.plano_options)
    }

    /// Cargar los dos `<select>` y la lista a la vez
    pub async fn init(&mut self) {
        let api = self.page.api().clone();
        let ((veiculos, planos), ()) = futures::join!(
            async { futures::join!(veiculo_options(&api), plano_options(&api)) },
            self.page.load()
        );
        self.veiculo_options = veiculos;
        self.plano_options = planos;
    }

    pub async fn load_options(&mut self) {
        let api = self.page.api().clone();
        let (veiculos, planos) = futures::join!(veiculo_options(&api), plano_options(&api));
        self.veiculo_options = veiculos;
        self.plano_options = planos;
    }

    /// Asociar; tras el éxito los `<select>` vuelven a la opción inicial
    pub async fn associate(&mut self, form: VeiculoPlanoForm) {
        self.page.create(form).await;
        if self.page.form_message().map_or(false, |m| !m.is_error()) {
            self.load_options().await;
        }
    }
}
