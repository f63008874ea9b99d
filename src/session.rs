//! Sesión del usuario
//!
//! Este módulo guarda el cookie jar compartido con el cliente HTTP (la
//! cookie de sesión del backend y `access_token`) y expone el usuario actual
//! decodificado del token.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;

use crate::utils::errors::ClientError;
use crate::utils::token::{get_cookie, parse_custom_token, Subject};

pub const MSG_NOT_AUTHENTICATED: &str = "❌ Você não está autenticado. Faça login novamente.";
pub const MSG_INVALID_TOKEN: &str = "❌ Token inválido. Faça login novamente.";

/// Sesión compartida entre el cliente HTTP y los controladores
#[derive(Clone)]
pub struct Session {
    jar: Arc<Jar>,
    base_url: Url,
    token_cookie: String,
}

impl Session {
    pub fn new(base_url: Url, token_cookie: impl Into<String>) -> Self {
        Self {
            jar: Arc::new(Jar::default()),
            base_url,
            token_cookie: token_cookie.into(),
        }
    }

    /// Jar que usa `reqwest` para enviar y recibir cookies
    pub fn jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Cookies actuales en formato `a=1; b=2`
    pub fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Valor de la cookie del token, sin comillas
    pub fn access_token(&self) -> Option<String> {
        let header = self.cookie_header()?;
        get_cookie(&header, &self.token_cookie)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
    }

    /// Guardar el token como cookie (útil cuando llega fuera del login)
    pub fn set_token(&self, token: &str) {
        let cookie = format!("{}={}; Path=/", self.token_cookie, token);
        self.jar.add_cookie_str(&cookie, &self.base_url);
        tracing::debug!("🔑 Token de sesión guardado en el jar");
    }

    /// Borrar el token (logout local)
    pub fn clear_token(&self) {
        let cookie = format!("{}=; Path=/; Max-Age=0", self.token_cookie);
        self.jar.add_cookie_str(&cookie, &self.base_url);
        tracing::debug!("🔑 Token de sesión eliminado del jar");
    }

    /// Usuario actual según el token.
    ///
    /// Solo sirve para acotar peticiones (`?usuario_id=`); no es una
    /// comprobación de autenticación.
    pub fn current_user(&self) -> Result<Subject, ClientError> {
        let token = self
            .access_token()
            .ok_or_else(|| ClientError::NotAuthenticated(MSG_NOT_AUTHENTICATED.to_string()))?;

        parse_custom_token(&token)
            .and_then(|payload| payload.user_id().cloned())
            .ok_or_else(|| ClientError::NotAuthenticated(MSG_INVALID_TOKEN.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Url::parse("http://frota.local/").unwrap(), "access_token")
    }

    #[test]
    fn test_without_token() {
        let session = session();
        assert!(session.access_token().is_none());
        let err = session.current_user().unwrap_err();
        assert_eq!(err.to_string(), MSG_NOT_AUTHENTICATED);
    }

    #[test]
    fn test_with_token() {
        let session = session();
        session.set_token("eyJzdWIiOjF9.sig");
        assert_eq!(session.access_token().as_deref(), Some("eyJzdWIiOjF9.sig"));
        assert_eq!(session.current_user().unwrap(), Subject::Id(1));

        session.clear_token();
        assert!(session.access_token().is_none());
    }

    #[test]
    fn test_with_invalid_token() {
        let session = session();
        session.set_token("not-a-token");
        let err = session.current_user().unwrap_err();
        assert_eq!(err.to_string(), MSG_INVALID_TOKEN);
    }
}
