//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del cliente: URL del backend,
//! timeouts y los retardos que usan las páginas después de una operación.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Errores al leer la configuración
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} debe ser un valor válido (recibido: '{value}')")]
    InvalidValue { name: &'static str, value: String },
}

/// Configuración del cliente
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub environment: String,
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    /// Retardo antes de cerrar un modal y recargar la lista tras un éxito
    pub success_delay_ms: u64,
    /// Retardo antes de redirigir (login tras registro, sesión inválida)
    pub redirect_delay_ms: u64,
    /// Ancho a partir del cual el menú lateral se cierra al navegar
    pub mobile_breakpoint: u32,
    pub token_cookie: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 30,
            success_delay_ms: 1500,
            redirect_delay_ms: 2000,
            mobile_breakpoint: 880,
            token_cookie: "access_token".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Leer la configuración del entorno; las variables ausentes toman el valor por defecto
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            api_base_url: env::var("API_BASE_URL").unwrap_or(defaults.api_base_url),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?,
            success_delay_ms: parse_var("SUCCESS_DELAY_MS", defaults.success_delay_ms)?,
            redirect_delay_ms: parse_var("REDIRECT_DELAY_MS", defaults.redirect_delay_ms)?,
            mobile_breakpoint: parse_var("MOBILE_BREAKPOINT", defaults.mobile_breakpoint)?,
            token_cookie: env::var("TOKEN_COOKIE").unwrap_or(defaults.token_cookie),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn success_delay(&self) -> Duration {
        Duration::from_millis(self.success_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}
