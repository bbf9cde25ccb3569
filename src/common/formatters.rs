// src/common/formatters.rs

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

lazy_static! {
    static ref NON_DIGITS: Regex = Regex::new(r"\D").expect("regex NON_DIGITS");
    static ref CPF_DIGITS: Regex =
        Regex::new(r"^(\d{3})(\d{3})(\d{3})(\d{2})$").expect("regex CPF_DIGITS");
    static ref CELULAR_DIGITS: Regex =
        Regex::new(r"^(\d{2})(\d{5})(\d{4})$").expect("regex CELULAR_DIGITS");
    static ref FIXO_DIGITS: Regex =
        Regex::new(r"^(\d{2})(\d{4})(\d{4})$").expect("regex FIXO_DIGITS");
    static ref CEP_DIGITS: Regex = Regex::new(r"^(\d{5})(\d{3})$").expect("regex CEP_DIGITS");
}

pub const DATA_INDISPONIVEL: &str = "Data não disponível";

const MESES: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

/// Remove tudo que não for dígito ("123.456.789-01" -> "12345678901").
pub fn digits_only(value: &str) -> String {
    NON_DIGITS.replace_all(value, "").into_owned()
}

/// 11 dígitos viram `000.000.000-00`. Qualquer outra coisa volta só com os dígitos.
pub fn format_cpf(cpf: &str) -> String {
    let digits = digits_only(cpf);
    CPF_DIGITS.replace(&digits, "$1.$2.$3-$4").into_owned()
}

/// Celular (11 dígitos) ou fixo (10 dígitos).
pub fn format_telefone(telefone: &str) -> String {
    let digits = digits_only(telefone);
    if digits.len() == 11 {
        return CELULAR_DIGITS.replace(&digits, "($1) $2-$3").into_owned();
    }
    FIXO_DIGITS.replace(&digits, "($1) $2-$3").into_owned()
}

pub fn format_cep(cep: &str) -> String {
    let digits = digits_only(cep);
    CEP_DIGITS.replace(&digits, "$1-$2").into_owned()
}

/// Máscara aplicada enquanto o usuário digita a data: "01022025" -> "01/02/2025".
pub fn mask_date_input(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(8).collect();

    let mut masked = String::with_capacity(10);
    for (i, c) in digits.chars().enumerate() {
        if i == 2 || i == 4 {
            masked.push('/');
        }
        masked.push(c);
    }
    masked
}

/// Valor em reais no padrão pt-BR: `R$ 1.234,56`.
pub fn format_brl(valor: Decimal) -> String {
    let mut rounded = valor
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let text = rounded.to_string();
    let (inteiro, centavos) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut agrupado = String::with_capacity(inteiro.len() + inteiro.len() / 3);
    for (i, c) in inteiro.chars().enumerate() {
        if i > 0 && (inteiro.len() - i) % 3 == 0 {
            agrupado.push('.');
        }
        agrupado.push(c);
    }

    let sinal = if valor.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{sinal}R$ {agrupado},{centavos}")
}

/// `dd/MM/yyyy`
pub fn format_date(data: NaiveDate) -> String {
    data.format("%d/%m/%Y").to_string()
}

pub fn format_optional_date(data: Option<NaiveDate>) -> String {
    data.map(format_date)
        .unwrap_or_else(|| DATA_INDISPONIVEL.to_string())
}

/// "1 de fevereiro de 2025"
pub fn format_date_long(data: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        data.day(),
        MESES[data.month0() as usize],
        data.year()
    )
}

/// "01/02/2025" (ou "01022025") -> 2025-02-01
pub fn br_date_to_iso(value: &str) -> Option<NaiveDate> {
    // Dígitos a mais não são cortados: a data é recusada
    if digits_only(value).len() != 8 {
        return None;
    }
    let masked = mask_date_input(value);
    if masked.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(&masked, "%d/%m/%Y").ok()
}

/// "2025-02-01" -> "01/02/2025"
pub fn iso_to_br_date(value: &str) -> Option<String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(format_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_raw_cpf() {
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
    }

    #[test]
    fn cpf_formatting_is_idempotent() {
        let once = format_cpf("12345678901");
        assert_eq!(format_cpf(&once), once);
        assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
    }

    #[test]
    fn incomplete_cpf_keeps_only_digits() {
        assert_eq!(format_cpf("123.456"), "123456");
    }

    #[test]
    fn formats_mobile_and_landline() {
        assert_eq!(format_telefone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_telefone("1134567890"), "(11) 3456-7890");
        assert_eq!(format_telefone("(11) 98765-4321"), "(11) 98765-4321");
    }

    #[test]
    fn phone_formatting_is_idempotent() {
        for raw in ["11987654321", "1134567890"] {
            let once = format_telefone(raw);
            assert_eq!(format_telefone(&once), once);
        }
    }

    #[test]
    fn formats_cep() {
        assert_eq!(format_cep("01310100"), "01310-100");
    }

    #[test]
    fn masks_date_while_typing() {
        assert_eq!(mask_date_input("01022025"), "01/02/2025");
        assert_eq!(mask_date_input("0102"), "01/02");
        assert_eq!(mask_date_input("010"), "01/0");
        assert_eq!(mask_date_input("01"), "01");
        assert_eq!(mask_date_input("0102202599"), "01/02/2025");
        assert_eq!(mask_date_input("01/02/2025"), "01/02/2025");
    }

    #[test]
    fn formats_currency_pt_br() {
        assert_eq!(format_brl(Decimal::new(123456, 2)), "R$ 1.234,56");
        assert_eq!(format_brl(Decimal::from(1500)), "R$ 1.500,00");
        assert_eq!(format_brl(Decimal::new(5, 1)), "R$ 0,50");
        assert_eq!(format_brl(Decimal::new(-250075, 2)), "-R$ 2.500,75");
        assert_eq!(format_brl(Decimal::from(1_000_000)), "R$ 1.000.000,00");
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_date(date(2025, 2, 1)), "01/02/2025");
        assert_eq!(format_date_long(date(2025, 2, 1)), "1 de fevereiro de 2025");
        assert_eq!(format_optional_date(None), DATA_INDISPONIVEL);
    }

    #[test]
    fn converts_between_br_and_iso() {
        assert_eq!(br_date_to_iso("01/02/2025"), Some(date(2025, 2, 1)));
        assert_eq!(br_date_to_iso("01022025"), Some(date(2025, 2, 1)));
        assert_eq!(br_date_to_iso("31/02/2025"), None);
        assert_eq!(br_date_to_iso("01/02"), None);
        assert_eq!(br_date_to_iso("01/02/20251"), None);
        assert_eq!(br_date_to_iso("010220251"), None);
        assert_eq!(iso_to_br_date("2025-02-01").as_deref(), Some("01/02/2025"));
        assert_eq!(iso_to_br_date("ontem"), None);
    }
}
