mod common;

use axum::http::{Method, StatusCode};

use common::{closed_port_url, test_config, FakeBackend, EMAIL, SENHA};
use frota_admin::controllers::{LoginController, RegistroController};
use frota_admin::dto::{LoginForm, RegistroForm};
use frota_admin::utils::token::Subject;
use frota_admin::ApiClient;

fn login_form(email: &str, senha: &str) -> LoginForm {
    LoginForm {
        email: email.to_string(),
        senha: senha.to_string(),
    }
}

fn registro(senha: &str, confirmar: &str) -> RegistroForm {
    RegistroForm {
        nome: "Bruno Lima".to_string(),
        email: "bruno@frota.com".to_string(),
        senha: senha.to_string(),
        confirmar_senha: confirmar.to_string(),
    }
}

#[tokio::test]
async fn test_login_requires_credentials() {
    let backend = FakeBackend::start().await;
    let mut login = LoginController::new(backend.client());

    login.submit(&login_form(EMAIL, "")).await;

    assert_eq!(login.message().unwrap().text, "E-mail e senha são obrigatórios");
    assert!(backend.requests().is_empty());
    assert!(login.navigation().is_none());
}

#[tokio::test]
async fn test_login_success_stores_session() {
    let backend = FakeBackend::start().await;
    let api = backend.client();
    let mut login = LoginController::new(api.clone());

    login.submit(&login_form(EMAIL, SENHA)).await;

    assert_eq!(login.take_navigation().as_deref(), Some("/ui/dashboard"));
    // la cookie del backend queda en el jar compartido
    assert_eq!(api.session().current_user().unwrap(), Subject::Id(1));

    let request = backend.last_request().unwrap();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.body.unwrap()["senha"], SENHA);
}

#[tokio::test]
async fn test_login_rejected() {
    let backend = FakeBackend::start().await;
    let mut login = LoginController::new(backend.client());

    login.submit(&login_form(EMAIL, "errada")).await;

    let message = login.message().unwrap();
    assert!(message.is_error());
    assert_eq!(message.text, "Erro: credenciais inválidas");
    assert!(login.navigation().is_none());
}

#[tokio::test]
async fn test_login_network_error() {
    let config = test_config(&closed_port_url().await);
    let mut login = LoginController::new(ApiClient::new(&config).unwrap());

    login.submit(&login_form(EMAIL, SENHA)).await;

    assert_eq!(login.message().unwrap().text, "Erro de conexão");
}

#[tokio::test]
async fn test_login_unreadable_response_is_not_connection_error() {
    let backend = FakeBackend::start().await;
    backend.fail(Method::POST, "/auth/login", StatusCode::OK, "<html>ok</html>");
    let mut login = LoginController::new(backend.client());

    login.submit(&login_form(EMAIL, SENHA)).await;

    let message = login.message().unwrap();
    assert!(message.is_error());
    assert!(message.text.starts_with("Resposta inválida do servidor"));
    assert!(login.navigation().is_none());
}

#[tokio::test]
async fn test_login_links_to_registration() {
    let backend = FakeBackend::start().await;
    let mut login = LoginController::new(backend.client());

    login.register();
    assert_eq!(login.take_navigation().as_deref(), Some("/ui/registro"));
}

#[tokio::test]
async fn test_registration_mismatch_blocks_request() {
    let backend = FakeBackend::start().await;
    let mut page = RegistroController::new(backend.client(), &backend.config());

    page.submit(&registro("abc123", "abc124")).await;

    assert_eq!(page.message().unwrap().text, "As senhas não coincidem");
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_registration_success_redirects_to_login() {
    let backend = FakeBackend::start().await;
    let mut page = RegistroController::new(backend.client(), &backend.config());

    page.submit(&registro("abc123", "abc123")).await;

    assert_eq!(backend.count(Method::POST, "/auth/registro"), 1);
    let body = backend.last_request().unwrap().body.unwrap();
    assert_eq!(body["email"], "bruno@frota.com");
    assert!(body.get("confirmar_senha").is_none());

    assert_eq!(page.message().unwrap().text, "Cadastro realizado com sucesso! Redirecionando...");
    assert!(page.navigation().is_none());
    assert!(page.has_pending());

    page.settle().await;
    assert_eq!(page.take_navigation().as_deref(), Some("/ui/login"));
}

#[tokio::test]
async fn test_registration_duplicate_email() {
    let backend = FakeBackend::start().await;
    let mut page = RegistroController::new(backend.client(), &backend.config());

    page.submit(&registro("abc123", "abc123")).await;
    page.settle().await;
    page.submit(&registro("abc123", "abc123")).await;

    assert_eq!(page.message().unwrap().text, "Erro: E-mail já cadastrado");
    assert!(!page.has_pending());
}

#[tokio::test]
async fn test_registration_network_error_and_back() {
    let config = test_config(&closed_port_url().await);
    let mut page = RegistroController::new(ApiClient::new(&config).unwrap(), &config);

    page.submit(&registro("abc123", "abc123")).await;
    assert_eq!(page.message().unwrap().text, "Erro de conexão com o servidor");

    page.back();
    assert_eq!(page.take_navigation().as_deref(), Some("/ui/login"));
}
