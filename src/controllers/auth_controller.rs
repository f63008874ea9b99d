//! Páginas de login y de registro

use std::time::Duration;

use serde_json::Value;

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::dto::{FormInput, LoginForm, RegistroForm};
use crate::models::LoginResponse;
use crate::ui::{Message, Scheduler};
use crate::utils::validation::message_of;

use super::list_controller::{Deferred, LOGIN_PATH};

pub const REGISTRO_PATH: &str = "/ui/registro";

/// Página de login
pub struct LoginController {
    api: ApiClient,
    message: Option<Message>,
    navigation: Option<String>,
}

impl LoginController {
    pub fn new(api: ApiClient) -> Self {
        Self { api, message: None, navigation: None }
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }

    pub fn take_navigation(&mut self) -> Option<String> {
        self.navigation.take()
    }

    /// Enviar las credenciales; el backend deja la cookie de sesión en el jar
    pub async fn submit(&mut self, form: &LoginForm) {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.message = Some(Message::error(message_of(&e)));
                return;
            }
        };

        self.message = Some(Message::muted("Autenticando..."));
        tracing::info!("🔐 Login de {}", request.email);

        match self.api.post_json::<_, Option<LoginResponse>>("/auth/login", &request).await {
            Ok(response) => {
                let response = response.unwrap_or_default();
                tracing::info!("✅ Login correcto, redirigiendo a {}", response.redirect_path());
                self.message = None;
                self.navigation = Some(response.redirect_path().to_string());
            }
            Err(e) if e.is_network() => {
                tracing::error!("❌ Login sin conexión: {}", e);
                self.message = Some(Message::error("Erro de conexão"));
            }
            Err(e) => {
                self.message = Some(Message::error(e.to_string()));
            }
        }
    }

    /// Botón "cadastre-se"
    pub fn register(&mut self) {
        self.navigation = Some(REGISTRO_PATH.to_string());
    }
}

/// Página de registro
pub struct RegistroController {
    api: ApiClient,
    redirect_delay: Duration,
    message: Option<Message>,
    navigation: Option<String>,
    scheduler: Scheduler<Deferred>,
}

impl RegistroController {
    pub fn new(api: ApiClient, config: &ClientConfig) -> Self {
        Self {
            api,
            redirect_delay: config.redirect_delay(),
            message: None,
            navigation: None,
            scheduler: Scheduler::new(),
        }
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }

    pub fn take_navigation(&mut self) -> Option<String> {
        self.navigation.take()
    }

    pub fn has_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Validar en orden y registrar; tras el éxito se vuelve al login
    pub async fn submit(&mut self, form: &RegistroForm) {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                self.message = Some(Message::error(message_of(&e)));
                return;
            }
        };

        self.message = Some(Message::muted("Cadastrando..."));
        tracing::info!("📝 Registrando {}", request.email);

        match self.api.post_json::<_, Value>("/auth/registro", &request).await {
            Ok(_) => {
                self.message = Some(Message::success("Cadastro realizado com sucesso! Redirecionando..."));
                self.scheduler
                    .schedule(self.redirect_delay, Deferred::Navigate(LOGIN_PATH.to_string()));
            }
            Err(e) if e.is_network() => {
                tracing::error!("❌ Registro sin conexión: {}", e);
                self.message = Some(Message::error("Erro de conexão com o servidor"));
            }
            Err(e) => {
                self.message = Some(Message::error(e.to_string()));
            }
        }
    }

    /// Botón "voltar"
    pub fn back(&mut self) {
        self.scheduler.cancel();
        self.navigation = Some(LOGIN_PATH.to_string());
    }

    fn apply(&mut self, command: Deferred) {
        if let Deferred::Navigate(path) = command {
            self.navigation = Some(path);
        }
    }

    pub fn poll(&mut self) {
        while let Some(command) = self.scheduler.try_fired() {
            self.apply(command);
        }
    }

    pub async fn settle(&mut self) {
        while let Some(command) = self.scheduler.wait().await {
            self.apply(command);
        }
    }
}
