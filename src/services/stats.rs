// src/services/stats.rs
//
// Funções puras que reduzem uma lista aos números dos cards.

use std::collections::BTreeMap;

use crate::models::{
    cliente::{Cliente, ClienteStatus},
    contrato::{Contrato, ContratoStatus},
    dashboard::QuantidadeValor,
    imovel::{Imovel, ImovelStatus},
    pagamento::{Pagamento, PagamentoAgrupado, PagamentoStatus},
    stats::{ClienteStats, ContratoStats, ImovelStats, PagamentoStats},
};

pub fn calculate_cliente_stats(clientes: &[Cliente]) -> ClienteStats {
    clientes.iter().fold(
        ClienteStats {
            total: clientes.len(),
            ..Default::default()
        },
        |mut s, c| {
            match c.status {
                ClienteStatus::Ativo => s.ativos += 1,
                ClienteStatus::Inativo => s.inativos += 1,
                ClienteStatus::Bloqueado => s.bloqueados += 1,
            }
            s
        },
    )
}

pub fn calculate_imovel_stats(imoveis: &[Imovel]) -> ImovelStats {
    let mut s = ImovelStats {
        total: imoveis.len(),
        ..Default::default()
    };
    for imovel in imoveis {
        match imovel.status {
            ImovelStatus::Disponivel => s.disponiveis += 1,
            ImovelStatus::Alugado => s.alugados += 1,
            ImovelStatus::Manutencao => s.em_manutencao += 1,
            ImovelStatus::Reservado => s.reservados += 1,
        }
        s.valor_total += imovel.valor_mensal;
    }
    s
}

pub fn calculate_contrato_stats(contratos: &[Contrato]) -> ContratoStats {
    let mut s = ContratoStats {
        total: contratos.len(),
        ..Default::default()
    };
    for contrato in contratos {
        match contrato.status {
            ContratoStatus::Ativo => {
                s.ativos += 1;
                s.receita_mensal += contrato.valor_mensal;
            }
            ContratoStatus::Finalizado => s.finalizados += 1,
            ContratoStatus::Cancelado => s.cancelados += 1,
        }
    }
    s
}

pub fn calculate_pagamento_stats(pagamentos: &[Pagamento]) -> PagamentoStats {
    let mut s = PagamentoStats {
        total: pagamentos.len(),
        ..Default::default()
    };
    for p in pagamentos {
        s.valor_total += p.valor;
        match p.status {
            PagamentoStatus::Pago => {
                s.pagos += 1;
                s.valor_total_pago += p.valor;
            }
            PagamentoStatus::Pendente => {
                s.pendentes += 1;
                s.valor_total_pendente += p.valor;
            }
            PagamentoStatus::Atrasado => {
                s.atrasados += 1;
                s.valor_total_atrasado += p.valor;
            }
            PagamentoStatus::Cancelado => {
                s.cancelados += 1;
                s.valor_total_cancelado += p.valor;
            }
        }
    }
    s
}

/// Quantidade e soma dos pagamentos com um dado status.
pub fn sum_by_status(pagamentos: &[Pagamento], status: PagamentoStatus) -> QuantidadeValor {
    pagamentos
        .iter()
        .filter(|p| p.status == status)
        .fold(QuantidadeValor::default(), |mut acc, p| {
            acc.quantidade += 1;
            acc.valor += p.valor;
            acc
        })
}

/// Agrupa os pagamentos por contrato, na ordem do id do contrato.
/// Pagamentos sem contrato ficam de fora.
pub fn group_by_contrato(pagamentos: &[Pagamento]) -> Vec<PagamentoAgrupado> {
    let mut grupos: BTreeMap<i64, PagamentoAgrupado> = BTreeMap::new();

    for p in pagamentos {
        let Some(contrato_id) = p.contrato() else {
            continue;
        };
        let g = grupos.entry(contrato_id).or_insert_with(|| PagamentoAgrupado {
            contrato_id,
            ..Default::default()
        });

        g.total_pagamentos += 1;
        g.valor_total += p.valor;
        match p.status {
            PagamentoStatus::Pago => {
                g.pagos += 1;
                g.valor_pago += p.valor;
            }
            PagamentoStatus::Pendente => {
                g.pendentes += 1;
                g.valor_pendente += p.valor;
            }
            PagamentoStatus::Atrasado => {
                g.atrasados += 1;
                g.valor_atrasado += p.valor;
            }
            PagamentoStatus::Cancelado => {}
        }
    }

    grupos.into_values().collect()
}

/// Pendências (pendentes e atrasados) somadas só dos contratos indicados.
pub fn pendencias_dos_contratos(
    agrupados: &[PagamentoAgrupado],
    contratos: &[i64],
) -> (QuantidadeValor, QuantidadeValor) {
    agrupados
        .iter()
        .filter(|g| contratos.contains(&g.contrato_id))
        .fold(
            (QuantidadeValor::default(), QuantidadeValor::default()),
            |(mut pend, mut atr), g| {
                pend.quantidade += g.pendentes;
                pend.valor += g.valor_pendente;
                atr.quantidade += g.atrasados;
                atr.valor += g.valor_atrasado;
                (pend, atr)
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn dec(v: &str) -> Decimal {
        v.parse().unwrap()
    }

    fn pagamento(id: i64, contrato: i64, valor: &str, status: &str) -> Pagamento {
        serde_json::from_value(json!({
            "id": id,
            "contratoId": contrato,
            "valor": valor.parse::<f64>().unwrap(),
            "status": status
        }))
        .unwrap()
    }

    fn amostra() -> Vec<Pagamento> {
        vec![
            pagamento(1, 10, "1500.00", "PAGO"),
            pagamento(2, 10, "1500.00", "PENDENTE"),
            pagamento(3, 11, "980.50", "ATRASADO"),
            pagamento(4, 11, "980.50", "PAGO"),
            pagamento(5, 12, "200.00", "CANCELADO"),
            pagamento(6, 12, "200.00", "PENDENTE"),
        ]
    }

    #[test]
    fn payment_status_subsets_add_up_to_total() {
        let s = calculate_pagamento_stats(&amostra());

        assert_eq!(s.total, 6);
        assert_eq!(s.pagos + s.pendentes + s.atrasados + s.cancelados, s.total);
        assert_eq!(
            s.valor_total_pago + s.valor_total_pendente + s.valor_total_atrasado + s.valor_total_cancelado,
            s.valor_total
        );
        assert_eq!(s.valor_total, dec("5361.00"));
        assert_eq!(s.valor_total_pago, dec("2480.50"));
    }

    #[test]
    fn empty_list_gives_zeroed_stats() {
        assert_eq!(calculate_pagamento_stats(&[]), PagamentoStats::default());
        assert_eq!(calculate_cliente_stats(&[]), ClienteStats::default());
    }

    #[test]
    fn sum_by_status_counts_and_sums() {
        let pendentes = sum_by_status(&amostra(), PagamentoStatus::Pendente);
        assert_eq!(pendentes.quantidade, 2);
        assert_eq!(pendentes.valor, dec("1700.00"));
    }

    #[test]
    fn grouping_by_contract() {
        let grupos = group_by_contrato(&amostra());
        assert_eq!(grupos.len(), 3);

        let g11 = &grupos[1];
        assert_eq!(g11.contrato_id, 11);
        assert_eq!(g11.total_pagamentos, 2);
        assert_eq!(g11.atrasados, 1);
        assert_eq!(g11.valor_atrasado, dec("980.50"));
        assert_eq!(g11.valor_total, dec("1961.00"));

        let (pend, atr) = pendencias_dos_contratos(&grupos, &[10, 12]);
        assert_eq!(pend.quantidade, 2);
        assert_eq!(pend.valor, dec("1700.00"));
        assert_eq!(atr.quantidade, 0);
    }

    #[test]
    fn contract_revenue_counts_only_active() {
        let contratos: Vec<Contrato> = serde_json::from_value(json!([
            { "id": 1, "status": "ATIVO", "valorMensal": 1000 },
            { "id": 2, "status": "FINALIZADO", "valorMensal": 700 },
            { "id": 3, "status": "ATIVO", "valorMensal": 250.5 }
        ]))
        .unwrap();

        let s = calculate_contrato_stats(&contratos);
        assert_eq!(s.ativos, 2);
        assert_eq!(s.finalizados, 1);
        assert_eq!(s.receita_mensal, dec("1250.5"));
    }

    #[test]
    fn property_stats_sum_rent() {
        let imoveis: Vec<Imovel> = serde_json::from_value(json!([
            { "id": 1, "status": "DISPONIVEL", "valorMensal": 1200 },
            { "id": 2, "status": "ALUGADO", "valorMensal": 800 },
            { "id": 3, "status": "MANUTENCAO", "valorMensal": 0 }
        ]))
        .unwrap();

        let s = calculate_imovel_stats(&imoveis);
        assert_eq!(s.disponiveis + s.alugados + s.em_manutencao + s.reservados, s.total);
        assert_eq!(s.valor_total, dec("2000"));
    }
}
