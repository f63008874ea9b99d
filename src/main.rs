use std::io::{self, Write};
use std::str::FromStr;

use anyhow::Result;
use colored::*;
use dotenvy::dotenv;
use tracing::info;

use frota_admin::controllers::list_controller::LOGIN_PATH;
use frota_admin::controllers::nav_controller::LOGOUT_PATH;
use frota_admin::controllers::{ListController, LoginController, NavController, RegistroController, VeiculoPlanoController};
use frota_admin::dto::{
    LoginForm, ManutencaoEditForm, ManutencaoForm, PlanoForm, RegistroForm, UsuarioForm, VeiculoEditForm,
    VeiculoForm, VeiculoPlanoForm,
};
use frota_admin::resources::{Deletable, Editable, Manutencoes, Planos, Resource, Usuarios, Veiculos};
use frota_admin::ui::{CloseReason, ListView, Message, Tone};
use frota_admin::{ApiClient, ClientConfig};

/// Ancho de pantalla que asume la consola para el menú lateral
const CONSOLE_WIDTH: u32 = 1280;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = ClientConfig::from_env()?;

    // Configurar logging
    let level = tracing::Level::from_str(&config.log_level).unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚗 Frota Admin - cliente de administración");
    info!("📡 Backend: {} ({})", config.api_base_url, config.environment);
    if config.is_development() {
        tracing::debug!("⚙️ Configuración: {:?}", config);
    }

    let api = ApiClient::new(&config)?;

    println!("{}", "🚗 Frota Admin".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());

    loop {
        if !auth_menu(&api, &config).await? {
            break;
        }
        if !main_menu(&api, &config).await? {
            break;
        }
    }

    println!("{}", "👋 Até logo!".bright_green());
    Ok(())
}

fn ask(label: &str) -> io::Result<String> {
    print!("{}", format!("{label}: ").bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim_end_matches(['\r', '\n']).to_string())
}

/// Pregunta con el valor actual; Enter lo conserva
fn ask_default(label: &str, current: &str) -> io::Result<String> {
    let value = ask(&format!("{label} [{current}]"))?;
    Ok(if value.is_empty() { current.to_string() } else { value })
}

fn print_message(message: Option<&Message>) {
    let Some(message) = message else {
        return;
    };
    let text = match message.tone {
        Tone::Muted => message.text.normal(),
        Tone::Error => message.text.bright_red(),
        Tone::Success => message.text.bright_green(),
    };
    println!("{text}");
}

fn print_list(list: &ListView) {
    if let Some(placeholder) = list.placeholder() {
        println!("{}", placeholder.dimmed());
        return;
    }
    for row in list.rows() {
        println!("  {}", row.cells.join(" | "));
    }
}

/// Formularios que la consola sabe rellenar
trait ConsoleForm: Sized {
    fn fill(current: &Self) -> io::Result<Self>;
}

impl ConsoleForm for UsuarioForm {
    fn fill(current: &Self) -> io::Result<Self> {
        Ok(Self {
            nome: ask_default("Nome", &current.nome)?,
            email: ask_default("E-mail", &current.email)?,
            senha: ask("Senha")?,
        })
    }
}

impl ConsoleForm for VeiculoForm {
    fn fill(current: &Self) -> io::Result<Self> {
        Ok(Self {
            placa: ask_default("Placa", &current.placa)?,
            ano: ask_default("Ano", &current.ano)?,
            marca: ask_default("Marca", &current.marca)?,
            modelo: ask_default("Modelo", &current.modelo)?,
            km_atual: ask_default("Km atual", &current.km_atual)?,
        })
    }
}

impl ConsoleForm for VeiculoEditForm {
    fn fill(current: &Self) -> io::Result<Self> {
        println!("Placa: {}", current.placa);
        Ok(Self {
            marca: ask_default("Marca", &current.marca)?,
            modelo: ask_default("Modelo", &current.modelo)?,
            ano: ask_default("Ano", &current.ano)?,
            km_atual: ask_default("Km atual", &current.km_atual)?,
            ..current.clone()
        })
    }
}

impl ConsoleForm for ManutencaoForm {
    fn fill(current: &Self) -> io::Result<Self> {
        Ok(Self {
            veiculo_id: ask_default("Id do veículo", &current.veiculo_id)?,
            data: ask_default("Data (AAAA-MM-DD)", &current.data)?,
            km: ask_default("Km", &current.km)?,
            tipo_manutencao: ask_default("Tipo", &current.tipo_manutencao)?,
            custo: ask_default("Custo", &current.custo)?,
            prestador_servico: ask_default("Prestador", &current.prestador_servico)?,
            descricao: ask_default("Descrição", &current.descricao)?,
        })
    }
}

impl ConsoleForm for ManutencaoEditForm {
    fn fill(current: &Self) -> io::Result<Self> {
        Ok(Self {
            placa: ask_default("Placa", &current.placa)?,
            data: ask_default("Data (AAAA-MM-DD)", &current.data)?,
            km: ask_default("Km", &current.km)?,
            tipo_manutencao: ask_default("Tipo", &current.tipo_manutencao)?,
            prestador_servico: ask_default("Prestador", &current.prestador_servico)?,
            custo: ask_default("Custo", &current.custo)?,
            observacoes: ask_default("Observações", &current.observacoes)?,
            ..current.clone()
        })
    }
}

impl ConsoleForm for PlanoForm {
    fn fill(current: &Self) -> io::Result<Self> {
        Ok(Self {
            nome: ask_default("Nome", &current.nome)?,
            descricao: ask_default("Descrição", &current.descricao)?,
            km_intervalo: ask_default("Intervalo (km)", &current.km_intervalo)?,
            dias_intervalo: ask_default("Intervalo (dias)", &current.dias_intervalo)?,
            ..current.clone()
        })
    }
}

impl ConsoleForm for VeiculoPlanoForm {
    fn fill(current: &Self) -> io::Result<Self> {
        Ok(Self {
            veiculo_id: ask_default("Id do veículo", &current.veiculo_id)?,
            plano_id: ask_default("Id do plano", &current.plano_id)?,
            proxima_data: ask_default("Próxima data (AAAA-MM-DD)", &current.proxima_data)?,
            proximo_km: ask_default("Próximo km", &current.proximo_km)?,
        })
    }
}

fn ask_id() -> io::Result<Option<i64>> {
    let value = ask("Id")?;
    let id = value.trim().parse().ok();
    if id.is_none() {
        println!("{}", "❌ Id inválido.".bright_red());
    }
    Ok(id)
}

/// Login / registro; `false` si el usuario quiere salir
async fn auth_menu(api: &ApiClient, config: &ClientConfig) -> Result<bool> {
    let mut login = LoginController::new(api.clone());

    loop {
        println!();
        println!("{}", "🔐 LOGIN".bright_cyan().bold());
        println!("1. Entrar");
        println!("2. Cadastre-se");
        println!("0. Sair");

        match ask("Opção")?.trim() {
            "1" => {
                let form = LoginForm {
                    email: ask("E-mail")?,
                    senha: ask("Senha")?,
                };
                login.submit(&form).await;
                print_message(login.message());
                if let Some(path) = login.take_navigation() {
                    info!("➡️ {}", path);
                    return Ok(true);
                }
            }
            "2" => {
                login.register();
                login.take_navigation();
                registro_page(api, config).await?;
            }
            "0" => return Ok(false),
            _ => println!("{}", "❌ Opção inválida.".bright_red()),
        }
    }
}

async fn registro_page(api: &ApiClient, config: &ClientConfig) -> Result<()> {
    let mut page = RegistroController::new(api.clone(), config);
    println!("{}", "📝 CADASTRO".bright_cyan().bold());

    let form = RegistroForm {
        nome: ask("Nome")?,
        email: ask("E-mail")?,
        senha: ask("Senha")?,
        confirmar_senha: ask("Confirmar senha")?,
    };
    page.submit(&form).await;
    print_message(page.message());
    page.settle().await;
    Ok(())
}

/// Menú principal; `false` si el usuario quiere salir
async fn main_menu(api: &ApiClient, config: &ClientConfig) -> Result<bool> {
    let mut nav = NavController::new(config, "/ui/dashboard", CONSOLE_WIDTH);

    loop {
        println!();
        println!("{}", "📋 MENU PRINCIPAL".bright_green().bold());
        for (i, link) in nav.links().iter().enumerate().skip(1) {
            let marker = if nav.is_active(link) { "▶" } else { " " };
            println!("{marker} {i}. {}", link.label);
        }
        println!("  9. Sair da conta");
        println!("  0. Sair");

        let choice = ask("Opção")?;
        let link = choice
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|i| *i > 0)
            .and_then(|i| nav.links().get(i).cloned());

        if let Some(link) = link {
            nav.click_link(&link.href);
            nav.take_navigation();
            let target = match link.href.as_str() {
                "/ui/usuarios" => usuarios_page(api, config).await?,
                "/ui/veiculos" => crud_page::<Veiculos>(api, config).await?,
                "/ui/manutencoes" => crud_page::<Manutencoes>(api, config).await?,
                "/ui/planos" => crud_page::<Planos>(api, config).await?,
                "/ui/veiculos-planos" => veiculo_plano_page(api, config).await?,
                _ => None,
            };
            if target.as_deref() == Some(LOGIN_PATH) {
                return Ok(true);
            }
            continue;
        }

        match choice.trim() {
            "9" => {
                nav.logout();
                if nav.take_navigation().as_deref() == Some(LOGOUT_PATH) {
                    api.session().clear_token();
                }
                return Ok(true);
            }
            "0" => return Ok(false),
            _ => println!("{}", "❌ Opção inválida.".bright_red()),
        }
    }
}

fn show_page<R: Resource>(page: &ListController<R>) {
    println!();
    println!("{}", format!("📄 {}", R::NAME.to_uppercase()).bright_cyan().bold());
    if let Some(filter) = page.filter() {
        println!("Filtro: {}", filter.bright_white());
    }
    print_list(page.list());
    print_message(page.message());
}

async fn usuarios_page(api: &ApiClient, config: &ClientConfig) -> Result<Option<String>> {
    let mut page = ListController::<Usuarios>::new(api.clone(), config);
    page.load().await;

    loop {
        show_page(&page);
        println!("1. Cadastrar  2. Recarregar  3. Limpar formulário  0. Voltar");
        match ask("Opção")?.trim() {
            "1" => {
                let form = UsuarioForm::fill(page.form())?;
                page.create(form).await;
                print_message(page.form_message());
            }
            "2" => page.load().await,
            "3" => page.clear_form(),
            "0" => return Ok(None),
            _ => println!("{}", "❌ Opção inválida.".bright_red()),
        }
    }
}

/// Página con alta, edición y borrado
async fn crud_page<R>(api: &ApiClient, config: &ClientConfig) -> Result<Option<String>>
where
    R: Editable + Deletable,
    R::CreateForm: ConsoleForm,
    R::EditForm: ConsoleForm,
{
    let mut page = ListController::<R>::new(api.clone(), config);
    page.load().await;
    if page.has_pending() {
        // sin sesión: mostrar el aviso y esperar la redirección
        show_page(&page);
        page.settle().await;
    }

    loop {
        page.poll().await;
        if let Some(path) = page.take_navigation() {
            return Ok(Some(path));
        }

        show_page(&page);
        println!("1. Cadastrar  2. Editar  3. Excluir  4. Filtrar  5. Limpar filtro  6. Limpar formulário  0. Voltar");
        match ask("Opção")?.trim() {
            "1" => {
                let form = <R::CreateForm as ConsoleForm>::fill(page.form())?;
                page.create(form).await;
                print_message(page.form_message());
            }
            "2" => {
                let Some(id) = ask_id()? else { continue };
                page.edit(id).await;
                let Some(current) = page.edit_modal().payload().cloned() else {
                    continue;
                };
                let form = <R::EditForm as ConsoleForm>::fill(&current)?;
                page.save(form).await;
                print_message(page.edit_modal().message());
                if page.has_pending() {
                    page.settle().await;
                } else {
                    page.close_edit(CloseReason::Cancel);
                }
            }
            "3" => {
                let Some(id) = ask_id()? else { continue };
                let label = page.list().row(id).map(|row| row.label.clone()).unwrap_or_else(|| format!("#{id}"));
                page.request_delete(id, label.clone());
                if ask(&format!("Excluir {label}? (s/N)"))?.trim().eq_ignore_ascii_case("s") {
                    page.confirm_delete().await;
                    print_message(page.delete_modal().message());
                    page.settle().await;
                } else {
                    page.close_delete(CloseReason::Cancel);
                }
            }
            "4" => page.apply_filter(&ask("Filtro")?).await,
            "5" => page.clear_filter().await,
            "6" => page.clear_form(),
            "0" => return Ok(None),
            _ => println!("{}", "❌ Opção inválida.".bright_red()),
        }
    }
}

async fn veiculo_plano_page(api: &ApiClient, config: &ClientConfig) -> Result<Option<String>> {
    let mut page = VeiculoPlanoController::new(api.clone(), config);
    page.init().await;

    loop {
        page.page_mut().poll().await;
        if let Some(path) = page.page_mut().take_navigation() {
            return Ok(Some(path));
        }

        show_page(page.page());
        println!("Veículos:");
        for option in page.veiculo_options() {
            println!("  {:>4}  {}", option.value, option.label);
        }
        println!("Planos:");
        for option in page.plano_options() {
            println!("  {:>4}  {}", option.value, option.label);
        }

        println!("1. Associar  2. Remover  3. Recarregar  0. Voltar");
        match ask("Opção")?.trim() {
            "1" => {
                let form = VeiculoPlanoForm::fill(page.page().form())?;
                page.associate(form).await;
                print_message(page.page().form_message());
            }
            "2" => {
                let Some(id) = ask_id()? else { continue };
                let label = page
                    .page()
                    .list()
                    .row(id)
                    .map(|row| row.label.clone())
                    .unwrap_or_else(|| format!("#{id}"));
                let list = page.page_mut();
                list.request_delete(id, label);
                list.confirm_delete().await;
                print_message(list.delete_modal().message());
                list.settle().await;
            }
            "3" => page.init().await,
            "0" => return Ok(None),
            _ => println!("{}", "❌ Opção inválida.".bright_red()),
        }
    }
}
