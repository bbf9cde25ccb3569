// src/models/stats.rs
//
// Os cards do topo de cada listagem.

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClienteStats {
    pub total: usize,
    pub ativos: usize,
    pub inativos: usize,
    pub bloqueados: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImovelStats {
    pub total: usize,
    pub disponiveis: usize,
    pub alugados: usize,
    pub em_manutencao: usize,
    pub reservados: usize,
    // Soma do aluguel mensal de todos os imóveis
    pub valor_total: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContratoStats {
    pub total: usize,
    pub ativos: usize,
    pub finalizados: usize,
    pub cancelados: usize,
    // Soma do valor mensal dos contratos ativos
    pub receita_mensal: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagamentoStats {
    pub total: usize,
    pub pagos: usize,
    pub pendentes: usize,
    pub atrasados: usize,
    pub cancelados: usize,
    pub valor_total: Decimal,
    pub valor_total_pago: Decimal,
    pub valor_total_pendente: Decimal,
    pub valor_total_atrasado: Decimal,
    pub valor_total_cancelado: Decimal,
}
