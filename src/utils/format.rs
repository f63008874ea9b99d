//! Formato pt-BR para las celdas de las tablas

use chrono::NaiveDate;

/// Separador de miles con punto: 12345 → "12.345"
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

/// Quilometragem: ausente o cero se muestra como "-"
pub fn format_km(value: Option<i64>) -> String {
    match value {
        Some(km) if km != 0 => format_thousands(km),
        _ => "-".to_string(),
    }
}

/// Quilometragem con unidad ("12.345 km")
pub fn format_km_unit(value: Option<i64>) -> String {
    match value {
        Some(km) if km != 0 => format!("{} km", format_thousands(km)),
        _ => "-".to_string(),
    }
}

/// Moneda brasileña: 1234.5 → "R$ 1.234,50"
pub fn format_brl(value: Option<f64>) -> String {
    let value = value.unwrap_or(0.0);
    let cents = (value.abs() * 100.0).round() as i64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {},{:02}", format_thousands(cents / 100), cents % 100)
}

/// Fecha ISO (YYYY-MM-DD) → dd/mm/yyyy; otros formatos se muestran tal cual
pub fn format_date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(|date| date.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => "-".to_string(),
    }
}

/// Texto opcional: ausente o vacío se muestra como "-"
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(text) => text.to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(12345), "12.345");
        assert_eq!(format_thousands(1234567), "1.234.567");
        assert_eq!(format_thousands(-4500), "-4.500");
    }

    #[test]
    fn test_km() {
        assert_eq!(format_km(Some(85000)), "85.000");
        assert_eq!(format_km(None), "-");
        assert_eq!(format_km_unit(Some(10000)), "10.000 km");
        assert_eq!(format_km_unit(Some(0)), "-");
    }

    #[test]
    fn test_brl() {
        assert_eq!(format_brl(Some(1234.5)), "R$ 1.234,50");
        assert_eq!(format_brl(Some(0.99)), "R$ 0,99");
        assert_eq!(format_brl(None), "R$ 0,00");
    }

    #[test]
    fn test_date() {
        assert_eq!(format_date(Some("2024-03-05")), "05/03/2024");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("ontem")), "ontem");
    }
}
