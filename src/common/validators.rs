// src/common/validators.rs
//
// Validações customizadas compartilhadas pelos formulários (usadas via
// `#[validate(custom(function = "..."))]`).

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::common::formatters::{br_date_to_iso, digits_only};

lazy_static! {
    // Aceita "12345678901" ou "123.456.789-01"
    static ref CPF_FORMAT: Regex =
        Regex::new(r"^\d{3}\.?\d{3}\.?\d{3}-?\d{2}$").expect("regex CPF_FORMAT");
    // Aceita "11987654321", "(11) 98765-4321", "(11) 3456-7890"
    static ref TELEFONE_FORMAT: Regex =
        Regex::new(r"^\(?\d{2}\)?\s?\d{4,5}-?\d{4}$").expect("regex TELEFONE_FORMAT");
    static ref FOTO_URL: Regex = Regex::new(r"^https?://\S+$").expect("regex FOTO_URL");
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

pub fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    let cpf = cpf.trim();
    if !CPF_FORMAT.is_match(cpf) || digits_only(cpf).len() != 11 {
        return Err(error("cpf", "CPF deve conter 11 dígitos"));
    }
    Ok(())
}

pub fn validate_telefone(telefone: &str) -> Result<(), ValidationError> {
    let telefone = telefone.trim();
    let len = digits_only(telefone).len();
    if len < 10 {
        return Err(error("telefone", "Telefone deve conter no mínimo 10 dígitos"));
    }
    if len > 11 {
        return Err(error("telefone", "Telefone deve conter no máximo 11 dígitos"));
    }
    if !TELEFONE_FORMAT.is_match(telefone) {
        return Err(error("telefone", "Telefone em formato inválido"));
    }
    Ok(())
}

/// Data no formato do formulário (DD/MM/YYYY) que precisa existir no calendário.
pub fn validate_data_br(data: &str) -> Result<(), ValidationError> {
    br_date_to_iso(data)
        .map(|_| ())
        .ok_or_else(|| error("data", "Data inválida. Use o formato DD/MM/AAAA"))
}

pub fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_positive(val: &Decimal) -> Result<(), ValidationError> {
    if *val <= Decimal::ZERO {
        return Err(error("range", "O valor deve ser maior que zero."));
    }
    Ok(())
}

pub fn validate_fotos(fotos: &[String]) -> Result<(), ValidationError> {
    if fotos.iter().any(|url| !FOTO_URL.is_match(url)) {
        return Err(error("url", "Todas as fotos devem ser URLs http(s) válidas"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_raw_and_masked_cpf() {
        assert!(validate_cpf("12345678901").is_ok());
        assert!(validate_cpf("123.456.789-01").is_ok());
    }

    #[test]
    fn rejects_short_or_garbled_cpf() {
        assert!(validate_cpf("1234567890").is_err());
        assert!(validate_cpf("123.456.789/01").is_err());
        assert!(validate_cpf("abc45678901").is_err());
    }

    #[test]
    fn phone_length_bounds() {
        assert!(validate_telefone("1134567890").is_ok());
        assert!(validate_telefone("(11) 98765-4321").is_ok());
        let curto = validate_telefone("113456789").unwrap_err();
        assert_eq!(curto.message.unwrap(), "Telefone deve conter no mínimo 10 dígitos");
        let longo = validate_telefone("119876543210").unwrap_err();
        assert_eq!(longo.message.unwrap(), "Telefone deve conter no máximo 11 dígitos");
    }

    #[test]
    fn form_date_must_exist() {
        assert!(validate_data_br("29/02/2024").is_ok());
        assert!(validate_data_br("29/02/2025").is_err());
        assert!(validate_data_br("2025-02-01").is_err());
    }

    #[test]
    fn money_checks() {
        assert!(validate_not_negative(&Decimal::ZERO).is_ok());
        assert!(validate_not_negative(&Decimal::new(-1, 2)).is_err());
        assert!(validate_positive(&Decimal::ZERO).is_err());
        assert!(validate_positive(&Decimal::from(900)).is_ok());
    }

    #[test]
    fn photo_urls() {
        assert!(validate_fotos(&["https://cdn.exemplo.com/a.jpg".to_string()]).is_ok());
        assert!(validate_fotos(&["ftp://x".to_string()]).is_err());
        assert!(validate_fotos(&[]).is_ok());
    }
}
