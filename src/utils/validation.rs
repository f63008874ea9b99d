//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validar los campos de los
//! formularios (siempre llegan como texto) y convertirlos a sus tipos.

use std::borrow::Cow;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use validator::{ValidationError, ValidationErrors};

lazy_static! {
    /// Regex permisiva de e-mail: algo@algo.algo sin espacios
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex de e-mail válida");
}

/// Asignar el mensaje que la página muestra al usuario
pub fn with_message(mut error: ValidationError, message: impl Into<Cow<'static, str>>) -> ValidationError {
    error.message = Some(message.into());
    error
}

/// Texto de un error de validación (mensaje o, en su defecto, el código)
pub fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

/// Primer mensaje de un `ValidationErrors` siguiendo el orden de campos dado
pub fn first_message(errors: &ValidationErrors, order: &[&str]) -> Option<String> {
    let fields = errors.field_errors();
    order
        .iter()
        .filter_map(|name| fields.get(name))
        .chain(fields.values())
        .find_map(|list| list.first())
        .map(message_of)
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !EMAIL_RE.is_match(value) {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de placa de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    // Mercosul (ABC1D23) o antigua (ABC-1234)
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Convertir un campo entero del formulario
pub fn parse_int(value: &str) -> Result<i64, ValidationError> {
    value.trim().parse::<i64>().map_err(|_| {
        let mut error = ValidationError::new("integer");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Convertir un campo decimal del formulario (acepta coma decimal)
pub fn parse_decimal(value: &str) -> Result<f64, ValidationError> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            let mut error = ValidationError::new("decimal");
            error.add_param("value".into(), &value.to_string());
            error
        })
}

/// Campo opcional: vacío → None, si no se convierte con `parse`
pub fn optional<T>(
    value: &str,
    parse: impl FnOnce(&str) -> Result<T, ValidationError>,
) -> Result<Option<T>, ValidationError> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse(value).map(Some)
    }
}

/// Texto opcional: recortado, vacío → None
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date("2024/01/15").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_validate_length() {
        let value = "test";
        assert!(validate_length(value, 1, 10).is_ok());
        assert!(validate_length(value, 5, 10).is_err());
        assert!(validate_length(value, 1, 3).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@frota.com.br").is_ok());
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("ana@frota").is_err());
        assert!(validate_email("ana silva@frota.com").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0.01).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
        assert!(validate_non_negative(0).is_ok());
        assert!(validate_non_negative(-1).is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("ABC1D23").is_ok());
        assert!(validate_license_plate("ABC-1234").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_int(" 42 ").unwrap(), 42);
        assert!(parse_int("4x").is_err());
        assert_eq!(parse_decimal("150,50").unwrap(), 150.5);
        assert!(parse_decimal("NaN").is_err());
        assert_eq!(optional("", parse_int).unwrap(), None);
        assert_eq!(optional("7", parse_int).unwrap(), Some(7));
        assert_eq!(optional_text("  "), None);
    }

    #[test]
    fn test_with_message() {
        let error = with_message(ValidationError::new("required"), "Campo obrigatório");
        assert_eq!(message_of(&error), "Campo obrigatório");
        assert_eq!(message_of(&ValidationError::new("required")), "required");
    }
}
