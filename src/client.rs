//! Cliente HTTP para el backend de la flota
//!
//! Este módulo contiene el cliente que usan todas las páginas: envía la
//! cookie de sesión y, si existe, el token como `Authorization: Bearer`,
//! y normaliza las respuestas de error a `ClientError`.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::session::Session;
use crate::utils::errors::ClientError;

/// Cliente HTTP del backend (barato de clonar)
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    session: Session,
}

/// Añadir parámetros de query a una ruta, codificados como `encodeURIComponent`
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

impl ApiClient {
    /// Crear nuevo cliente HTTP con la URL base configurada
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            ClientError::Config(format!("API_BASE_URL '{}': {}", config.api_base_url, e))
        })?;
        let session = Session::new(base_url, config.token_cookie.clone());

        let client = Client::builder()
            .timeout(config.request_timeout())
            .cookie_provider(session.jar())
            .build()?;

        Ok(Self { client, session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.session
            .base_url()
            .join(path)
            .map_err(|e| ClientError::Config(format!("ruta inválida '{}': {}", path, e)))
    }

    /// Petición con el transporte de autenticación común a todas las páginas
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.url(path)?;
        tracing::debug!("🌐 {} {}", method, url);

        let mut builder = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");
        if let Some(token) = self.session.access_token() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        Ok(builder)
    }

    /// Enviar y convertir cualquier status no 2xx en `ClientError::Backend`
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("❌ Error de red: {}", e);
            ClientError::Network(e)
        })?;

        let status = response.status();
        tracing::debug!("📡 Response status: {}", status);
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ClientError::from_backend(status, &body);
        tracing::warn!("❌ Backend rechazó la petición ({}): {}", status, error.detail());
        Err(error)
    }

    /// Leer el cuerpo JSON; un cuerpo vacío se lee como `null`
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let text = response.text().await?;
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(text)?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.send(self.request(Method::GET, path)?).await?;
        Self::read_json(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::POST, path)?.json(body)).await?;
        Self::read_json(response).await
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(Method::PUT, path)?.json(body)).await?;
        Self::read_json(response).await
    }

    /// DELETE: `204` y cualquier otro 2xx cuentan como éxito
    pub async fn delete(&self, path: &str) -> Result<StatusCode, ClientError> {
        let response = self.send(self.request(Method::DELETE, path)?).await?;
        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/veiculos/", &[]), "/veiculos/");
        assert_eq!(with_query("/veiculos/", &[("placa", "ABC 1D23")]), "/veiculos/?placa=ABC%201D23");
        assert_eq!(with_query("/planos/", &[("usuario_id", "1")]), "/planos/?usuario_id=1");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig {
            api_base_url: "no es una url".to_string(),
            ..ClientConfig::default()
        };
        assert!(matches!(ApiClient::new(&config), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_paths_resolve_against_origin() {
        let client = ApiClient::new(&ClientConfig::default()).unwrap();
        let url = client.url("/veiculos/5").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/veiculos/5");
    }
}
