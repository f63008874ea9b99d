use serde::{Deserialize, Serialize};

/// Request de login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub senha: String,
}

/// Respuesta del login; `redirect` indica a dónde ir
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub redirect: Option<String>,
}

pub const DEFAULT_REDIRECT: &str = "/ui/dashboard";

impl LoginResponse {
    pub fn redirect_path(&self) -> &str {
        self.redirect
            .as_deref()
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_REDIRECT)
    }
}
