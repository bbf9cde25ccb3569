// src/models/contrato.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::common::formatters::{format_brl, format_cpf, format_optional_date};
use crate::common::nullable::null_as_default;
use crate::models::cliente::ClienteRef;
use crate::models::imovel::ImovelRef;
use crate::models::pagamento::PagamentoStatus;
use crate::models::status::{BadgeColor, StatusBadge, StatusDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContratoStatus {
    #[default]
    Ativo,
    Finalizado,
    Cancelado,
}

impl StatusDisplay for ContratoStatus {
    const ALL: &'static [Self] = &[Self::Ativo, Self::Finalizado, Self::Cancelado];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Ativo => "ATIVO",
            Self::Finalizado => "FINALIZADO",
            Self::Cancelado => "CANCELADO",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Ativo => "Ativo",
            Self::Finalizado => "Finalizado",
            Self::Cancelado => "Cancelado",
        }
    }

    fn color(&self) -> BadgeColor {
        match self {
            Self::Ativo => BadgeColor::Success,
            Self::Finalizado => BadgeColor::Info,
            Self::Cancelado => BadgeColor::Danger,
        }
    }
}

// Parcela embutida no contrato (GET /alugueis/{id})
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Parcela {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub valor: Decimal,
    #[schema(value_type = Option<String>, format = Date)]
    pub data_vencimento: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date)]
    pub data_pagamento: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: PagamentoStatus,
}

// O contrato de locação (recurso /alugueis no backend)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contrato {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    pub cliente_id: Option<i64>,
    pub imovel_id: Option<i64>,

    #[schema(value_type = Option<String>, format = Date, example = "2025-02-01")]
    pub data_inicio: Option<NaiveDate>,
    #[schema(value_type = Option<String>, format = Date, example = "2026-01-31")]
    pub data_fim: Option<NaiveDate>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub valor_mensal: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub valor_deposito: Decimal,
    pub dia_pagamento: Option<u8>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub taxa_administracao: Decimal,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ContratoStatus,
    pub observacoes: Option<String>,

    pub cliente: Option<ClienteRef>,
    pub imovel: Option<ImovelRef>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub pagamentos: Vec<Parcela>,
}

impl Contrato {
    /// Preenche `clienteId`/`imovelId` a partir dos objetos embutidos quando o
    /// backend só manda os objetos.
    pub fn normalize(mut self) -> Self {
        if self.cliente_id.is_none() {
            self.cliente_id = self.cliente.as_ref().and_then(|c| c.id);
        }
        if self.imovel_id.is_none() {
            self.imovel_id = self.imovel.as_ref().and_then(|i| i.id);
        }
        self
    }

    pub fn periodo(&self) -> String {
        format!(
            "{} a {}",
            format_optional_date(self.data_inicio),
            format_optional_date(self.data_fim)
        )
    }
}

// Corpo de POST /alugueis e PATCH /alugueis/{id}
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContratoRequest {
    pub cliente_id: i64,
    pub imovel_id: i64,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub valor_mensal: Decimal,
    pub valor_deposito: Decimal,
    pub dia_pagamento: u8,
    pub taxa_administracao: Decimal,
    pub status: ContratoStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

// Resposta de GET /alugueis/verificar-disponibilidade
#[derive(Debug, Clone, Deserialize)]
pub struct Disponibilidade {
    pub disponivel: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContratoRow {
    pub id: i64,
    pub cliente_id: Option<i64>,
    pub imovel_id: Option<i64>,
    pub cliente_nome: String,
    pub cliente_cpf: String,
    pub imovel_nome: String,
    pub imovel_codigo: String,
    #[schema(example = "01/02/2025 a 31/01/2026")]
    pub periodo: String,
    #[schema(example = "R$ 1.500,00")]
    pub valor_mensal: String,
    pub dia_pagamento: Option<u8>,
    pub status: StatusBadge,
}

impl From<&Contrato> for ContratoRow {
    fn from(c: &Contrato) -> Self {
        let cliente = c.cliente.clone().unwrap_or_default();
        let imovel = c.imovel.clone().unwrap_or_default();
        Self {
            id: c.id,
            cliente_id: c.cliente_id,
            imovel_id: c.imovel_id,
            cliente_nome: cliente.nome,
            cliente_cpf: format_cpf(&cliente.cpf),
            imovel_nome: imovel.nome,
            imovel_codigo: imovel.codigo,
            periodo: c.periodo(),
            valor_mensal: format_brl(c.valor_mensal),
            dia_pagamento: c.dia_pagamento,
            status: c.status.badge(),
        }
    }
}
