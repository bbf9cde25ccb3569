// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{
    pagamento::PagamentoRow,
    stats::PagamentoStats,
    status::StatusBadge,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuantidadeValor {
    pub quantidade: usize,
    pub valor: Decimal,
}

// --- Painel do administrador ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImoveisResumo {
    pub total: usize,
    // Imóveis disponíveis para locação
    pub ativos: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagamentosResumo {
    pub pendentes: QuantidadeValor,
    pub atrasados: QuantidadeValor,
    pub recebidos: QuantidadeValor,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImovelResumo {
    pub nome: String,
    pub codigo: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AtividadeRecente {
    #[schema(example = "Pagamento Recebido")]
    pub tipo: String,
    #[schema(example = "R$ 1.500,00")]
    pub descricao: String,
    #[schema(example = "05/02/2025")]
    pub data: String,
    pub imovel: ImovelResumo,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub imoveis: ImoveisResumo,
    pub pagamentos: PagamentosResumo,
    pub atividades_recentes: Vec<AtividadeRecente>,
}

// --- Pagamentos de um contrato (admin) ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagamentosDoContrato {
    pub contrato_id: i64,
    pub imovel_nome: Option<String>,
    pub imovel_codigo: Option<String>,
    pub cliente_nome: Option<String>,
    pub pagamentos: Vec<PagamentoRow>,
    pub stats: PagamentoStats,
    pub error: Option<String>,
}

// --- Portal do inquilino ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContratoAtivo {
    pub id: i64,
    pub imovel_nome: String,
    pub imovel_codigo: String,
    pub imovel_tipo: String,
    pub imovel_endereco: String,
    pub periodo: String,
    pub valor_mensal: String,
    pub dia_pagamento: Option<u8>,
    pub duracao_meses: u32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlugueisResumo {
    pub total: usize,
    pub ativos: Vec<ContratoAtivo>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendenciasResumo {
    pub pendentes: QuantidadeValor,
    pub atrasados: QuantidadeValor,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteDashboard {
    pub alugueis: AlugueisResumo,
    pub pagamentos: PendenciasResumo,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParcelaRow {
    pub id: i64,
    pub valor: String,
    pub vencimento: String,
    pub data_pagamento: String,
    pub status: StatusBadge,
    pub pode_pagar: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContratoDetalhe {
    pub id: i64,
    pub status: StatusBadge,
    pub imovel_nome: String,
    pub imovel_tipo: String,
    pub imovel_codigo: String,
    pub imovel_endereco: String,
    pub administrador_nome: Option<String>,
    pub administrador_email: Option<String>,
    pub data_inicio: String,
    pub data_fim: String,
    #[schema(example = "1 de fevereiro de 2025 a 31 de janeiro de 2026")]
    pub vigencia: Option<String>,
    pub valor_mensal: String,
    pub valor_deposito: String,
    pub taxa_administracao: Decimal,
    pub dia_pagamento: Option<u8>,
    pub observacoes: Option<String>,
    pub parcelas: Vec<ParcelaRow>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoDetalhe {
    pub id: i64,
    pub contrato_id: Option<i64>,
    pub valor: String,
    pub data_pagamento: String,
    pub status: StatusBadge,
    pub imovel_nome: String,
    pub imovel_endereco: String,
    pub pode_pagar: bool,
    pub metodos_disponiveis: Vec<StatusBadge>,
}

// Resposta do pagamento feito pelo portal
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoRealizado {
    pub pagamento_id: i64,
    pub redirect: String,
}
