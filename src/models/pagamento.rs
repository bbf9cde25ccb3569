// src/models/pagamento.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::formatters::{format_brl, format_cpf, format_optional_date};
use crate::common::nullable::null_as_default;
use crate::models::cliente::ClienteRef;
use crate::models::imovel::ImovelRef;
use crate::models::status::{BadgeColor, StatusBadge, StatusDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PagamentoStatus {
    #[default]
    Pendente,
    Pago,
    Atrasado,
    Cancelado,
}

impl StatusDisplay for PagamentoStatus {
    const ALL: &'static [Self] = &[Self::Pendente, Self::Pago, Self::Atrasado, Self::Cancelado];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "PENDENTE",
            Self::Pago => "PAGO",
            Self::Atrasado => "ATRASADO",
            Self::Cancelado => "CANCELADO",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pendente => "Pendente",
            Self::Pago => "Pago",
            Self::Atrasado => "Atrasado",
            Self::Cancelado => "Cancelado",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            Self::Pendente => BadgeColor::Warning,
            Self::Pago => BadgeColor::Success,
            Self::Atrasado => BadgeColor::Danger,
            Self::Cancelado => BadgeColor::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum FormaPagamento {
    Pix,
    Cartao,
    Boleto,
    Dinheiro,
}

impl StatusDisplay for FormaPagamento {
    const ALL: &'static [Self] = &[Self::Pix, Self::Cartao, Self::Boleto, Self::Dinheiro];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::Cartao => "CARTAO",
            Self::Boleto => "BOLETO",
            Self::Dinheiro => "DINHEIRO",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::Cartao => "Cartão",
            Self::Boleto => "Boleto",
            Self::Dinheiro => "Dinheiro",
        }
    }

    fn color(&self) -> BadgeColor {
        BadgeColor::Info
    }
}

impl FormaPagamento {
    /// Métodos que o inquilino pode usar no portal (dinheiro só no balcão).
    pub const PORTAL: &'static [Self] = &[Self::Pix, Self::Cartao, Self::Boleto];
}

// Referência ao aluguel que alguns endpoints embutem no pagamento
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AluguelRef {
    pub id: Option<i64>,
    pub imovel: Option<ImovelRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagamento {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    pub contrato_id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[schema(example = "1500.00")]
    pub valor: Decimal,

    #[schema(value_type = Option<String>, format = Date, example = "2025-02-05")]
    pub data_pagamento: Option<NaiveDate>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PagamentoStatus,

    pub forma_pagamento: Option<FormaPagamento>,

    pub observacoes: Option<String>,

    pub cliente: Option<ClienteRef>,
    pub imovel: Option<ImovelRef>,
    pub aluguel: Option<AluguelRef>,
}

impl Pagamento {
    pub fn contrato(&self) -> Option<i64> {
        self.contrato_id
            .or_else(|| self.aluguel.as_ref().and_then(|a| a.id))
    }

    pub fn imovel_ref(&self) -> Option<&ImovelRef> {
        self.imovel
            .as_ref()
            .or_else(|| self.aluguel.as_ref().and_then(|a| a.imovel.as_ref()))
    }
}

// GET /pagamentos/agrupados
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoAgrupado {
    pub contrato_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub valor_total: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pagamentos: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagos: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub valor_pago: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pendentes: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub valor_pendente: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub atrasados: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub valor_atrasado: Decimal,
}

// Corpo de POST /pagamentos e PUT /pagamentos/{id}
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoRequest {
    pub contrato_id: i64,
    pub valor: Decimal,
    pub data_pagamento: NaiveDate,
    pub status: PagamentoStatus,
    pub forma_pagamento: Option<FormaPagamento>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusRequest<'a> {
    pub status: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormaPagamentoRequest {
    pub forma_pagamento: Option<FormaPagamento>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PagarRequest {
    pub metodo: FormaPagamento,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoRow {
    pub id: i64,
    pub contrato_id: Option<i64>,
    pub cliente_nome: String,
    pub cliente_cpf: String,
    pub imovel_nome: String,
    pub imovel_codigo: String,
    #[schema(example = "R$ 1.500,00")]
    pub valor: String,
    #[schema(example = "05/02/2025")]
    pub data_pagamento: String,
    pub status: StatusBadge,
    pub forma_pagamento: Option<StatusBadge>,
}

impl From<&Pagamento> for PagamentoRow {
    fn from(p: &Pagamento) -> Self {
        let cliente = p.cliente.clone().unwrap_or_default();
        let imovel = p.imovel_ref().cloned().unwrap_or_default();
        Self {
            id: p.id,
            contrato_id: p.contrato(),
            cliente_nome: cliente.nome,
            cliente_cpf: format_cpf(&cliente.cpf),
            imovel_nome: imovel.nome,
            imovel_codigo: imovel.codigo,
            valor: format_brl(p.valor),
            data_pagamento: format_optional_date(p.data_pagamento),
            status: p.status.badge(),
            forma_pagamento: p.forma_pagamento.map(|f| f.badge()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contract_and_property_fall_back_to_embedded_lease() {
        let p: Pagamento = serde_json::from_value(json!({
            "id": 9,
            "valor": 1200,
            "status": "ATRASADO",
            "formaPagamento": null,
            "aluguel": { "id": 4, "imovel": { "nome": "Loja 2", "codigo": "IMV-002" } }
        }))
        .unwrap();

        assert_eq!(p.contrato(), Some(4));
        assert_eq!(p.imovel_ref().unwrap().codigo, "IMV-002");
        assert_eq!(p.forma_pagamento, None);
    }

    #[test]
    fn null_amount_and_names_decode_as_defaults() {
        let p: Pagamento = serde_json::from_value(json!({
            "id": 10,
            "valor": null,
            "status": null,
            "cliente": { "id": 3, "nome": null, "cpf": null },
            "imovel": { "nome": "Casa", "codigo": null }
        }))
        .unwrap();

        assert_eq!(p.valor, Decimal::ZERO);
        assert_eq!(p.status, PagamentoStatus::Pendente);
        assert_eq!(p.cliente.unwrap().nome, "");
        assert_eq!(p.imovel.unwrap().codigo, "");
    }

    #[test]
    fn payment_method_wire_names() {
        assert_eq!(serde_json::to_value(FormaPagamento::Cartao).unwrap(), "CARTAO");
        assert_eq!(FormaPagamento::parse("pix"), Some(FormaPagamento::Pix));
        assert_eq!(FormaPagamento::parse("CHEQUE"), None);
    }
}
