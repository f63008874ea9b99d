//! Utilidades del token de sesión
//!
//! El backend guarda en la cookie `access_token` un token de dos partes
//! (`payload_base64.firma`). Aquí solo se decodifica el payload para saber
//! quién es el usuario actual; la firma NO se verifica y el resultado es
//! informativo, el backend autoriza cada petición por su cuenta.

use std::fmt;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Base64 estándar, con o sin padding
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Identificador del usuario en el claim `sub` (número o texto)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Subject {
    Id(i64),
    Name(String),
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Id(id) => write!(f, "{id}"),
            Subject::Name(name) => f.write_str(name),
        }
    }
}

/// Payload decodificado del token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    pub sub: Option<Subject>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenPayload {
    /// Id del usuario actual, si el token trae un `sub` no vacío
    pub fn user_id(&self) -> Option<&Subject> {
        match &self.sub {
            Some(Subject::Name(name)) if name.is_empty() => None,
            other => other.as_ref(),
        }
    }
}

/// Quitar comillas dobles literales alrededor del valor
pub fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

/// Buscar una cookie en un header estilo `a=1; b=2`
pub fn get_cookie<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| unquote(value))
}

/// Decodificar el token `payload_base64.firma`.
///
/// Devuelve `None` si el token no tiene exactamente dos partes o si el
/// payload no es base64 de un objeto JSON.
pub fn parse_custom_token(token: &str) -> Option<TokenPayload> {
    let token = unquote(token.trim());

    let mut parts = token.split('.');
    let (payload, _signature) = match (parts.next(), parts.next(), parts.next()) {
        (Some(payload), Some(signature), None) => (payload, signature),
        _ => return None,
    };

    let bytes = match PAYLOAD_ENGINE.decode(payload) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!("⚠️ Payload del token no es base64: {}", e);
            return None;
        }
    };

    match serde_json::from_slice::<TokenPayload>(&bytes) {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::debug!("⚠️ Payload del token no es un objeto JSON: {}", e);
            None
        }
    }
}
