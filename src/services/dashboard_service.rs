// src/services/dashboard_service.rs

use axum::http::StatusCode;
use chrono::{Datelike, Days, NaiveDate};

use crate::{
    backend::{ContratoRepository, ImovelRepository, PagamentoRepository},
    common::{
        error::AppError,
        formatters::{format_brl, format_date_long, format_optional_date},
    },
    models::{
        auth::Session,
        contrato::{Contrato, ContratoStatus, Parcela},
        dashboard::{
            AdminDashboard, AlugueisResumo, AtividadeRecente, ClienteDashboard, ContratoAtivo,
            ContratoDetalhe, ImoveisResumo, ImovelResumo, PagamentoDetalhe, PagamentoRealizado,
            PagamentosResumo, ParcelaRow, PendenciasResumo,
        },
        forms::PagarForm,
        imovel::ImovelStatus,
        pagamento::{FormaPagamento, Pagamento, PagamentoAgrupado, PagamentoStatus},
        status::StatusDisplay,
    },
    services::stats::{group_by_contrato, pendencias_dos_contratos, sum_by_status},
};

const ATIVIDADES_RECENTES: usize = 5;

/// Meses cheios entre o início e o fim do contrato, contando o último dia.
pub fn duracao_meses(inicio: NaiveDate, fim: NaiveDate) -> u32 {
    let Some(fim) = fim.checked_add_days(Days::new(1)) else {
        return 0;
    };
    if fim <= inicio {
        return 0;
    }

    let mut meses = (fim.year() - inicio.year()) * 12 + fim.month() as i32 - inicio.month() as i32;
    if fim.day() < inicio.day() {
        meses -= 1;
    }
    meses.max(0) as u32
}

fn pode_pagar(status: PagamentoStatus) -> bool {
    matches!(status, PagamentoStatus::Pendente | PagamentoStatus::Atrasado)
}

fn atividade(p: &Pagamento) -> AtividadeRecente {
    let imovel = p.imovel_ref().cloned().unwrap_or_default();
    AtividadeRecente {
        tipo: if p.status == PagamentoStatus::Pago {
            "Pagamento Recebido".into()
        } else {
            "Pagamento Pendente".into()
        },
        descricao: format_brl(p.valor),
        data: format_optional_date(p.data_pagamento),
        imovel: ImovelResumo {
            nome: imovel.nome,
            codigo: imovel.codigo,
        },
    }
}

/// Os pagamentos mais recentes primeiro; sem data vão para o fim.
pub fn atividades_recentes(pagamentos: &[Pagamento]) -> Vec<AtividadeRecente> {
    let mut ordenados: Vec<&Pagamento> = pagamentos.iter().collect();
    ordenados.sort_by(|a, b| b.data_pagamento.cmp(&a.data_pagamento));
    ordenados
        .into_iter()
        .take(ATIVIDADES_RECENTES)
        .map(atividade)
        .collect()
}

fn contrato_ativo(c: &Contrato) -> ContratoAtivo {
    let imovel = c.imovel.clone().unwrap_or_default();
    let duracao = match (c.data_inicio, c.data_fim) {
        (Some(inicio), Some(fim)) => duracao_meses(inicio, fim),
        _ => 0,
    };

    ContratoAtivo {
        id: c.id,
        imovel_nome: imovel.nome,
        imovel_codigo: imovel.codigo,
        imovel_tipo: imovel.tipo,
        imovel_endereco: imovel.endereco,
        periodo: c.periodo(),
        valor_mensal: format_brl(c.valor_mensal),
        dia_pagamento: c.dia_pagamento,
        duracao_meses: duracao,
    }
}

fn parcela_row(p: &Parcela) -> ParcelaRow {
    ParcelaRow {
        id: p.id,
        valor: format_brl(p.valor),
        vencimento: format_optional_date(p.data_vencimento),
        data_pagamento: format_optional_date(p.data_pagamento),
        status: p.status.badge(),
        pode_pagar: pode_pagar(p.status),
    }
}

#[derive(Clone)]
pub struct DashboardService {
    imoveis_repo: ImovelRepository,
    contratos_repo: ContratoRepository,
    pagamentos_repo: PagamentoRepository,
}

impl DashboardService {
    pub fn new(
        imoveis_repo: ImovelRepository,
        contratos_repo: ContratoRepository,
        pagamentos_repo: PagamentoRepository,
    ) -> Self {
        Self {
            imoveis_repo,
            contratos_repo,
            pagamentos_repo,
        }
    }

    // =========================================================================
    //  PAINEL DO ADMINISTRADOR
    // =========================================================================

    pub async fn admin(&self, session: &Session) -> Result<AdminDashboard, AppError> {
        let (imoveis, pagamentos) = tokio::try_join!(
            self.imoveis_repo.list(session),
            self.pagamentos_repo.list(session)
        )?;

        let ativos = imoveis
            .iter()
            .filter(|i| i.status == ImovelStatus::Disponivel)
            .count();

        Ok(AdminDashboard {
            imoveis: ImoveisResumo {
                total: imoveis.len(),
                ativos,
            },
            pagamentos: PagamentosResumo {
                pendentes: sum_by_status(&pagamentos, PagamentoStatus::Pendente),
                atrasados: sum_by_status(&pagamentos, PagamentoStatus::Atrasado),
                recebidos: sum_by_status(&pagamentos, PagamentoStatus::Pago),
            },
            atividades_recentes: atividades_recentes(&pagamentos),
        })
    }

    // =========================================================================
    //  PORTAL DO INQUILINO
    // =========================================================================

    pub async fn cliente_home(&self, session: &Session) -> Result<ClienteDashboard, AppError> {
        let cliente_id = session.user_id.ok_or(AppError::Unauthenticated)?;

        let contratos = self.contratos_repo.list_by_cliente(session, cliente_id).await?;
        let ativos: Vec<ContratoAtivo> = contratos
            .iter()
            .filter(|c| c.status == ContratoStatus::Ativo)
            .map(contrato_ativo)
            .collect();

        let ids: Vec<i64> = ativos.iter().map(|c| c.id).collect();
        let agrupados = self.agrupados(session).await?;
        let (pendentes, atrasados) = pendencias_dos_contratos(&agrupados, &ids);

        Ok(ClienteDashboard {
            alugueis: AlugueisResumo {
                total: ativos.len(),
                ativos,
            },
            pagamentos: PendenciasResumo {
                pendentes,
                atrasados,
            },
        })
    }

    // Ids dos contratos do inquilino logado (GET /alugueis/cliente/{id})
    async fn contratos_do_inquilino(&self, session: &Session) -> Result<Vec<i64>, AppError> {
        let cliente_id = session.user_id.ok_or(AppError::Unauthenticated)?;
        let contratos = self.contratos_repo.list_by_cliente(session, cliente_id).await?;
        Ok(contratos.iter().map(|c| c.id).collect())
    }

    // Parcela de um contrato do inquilino; qualquer outra vira 404
    async fn pagamento_do_inquilino(&self, session: &Session, id: i64) -> Result<Pagamento, AppError> {
        let (pagamento, meus) = tokio::try_join!(
            self.pagamentos_repo.find_by_id(session, id),
            self.contratos_do_inquilino(session)
        )?;

        match pagamento.contrato() {
            Some(contrato_id) if meus.contains(&contrato_id) => Ok(pagamento),
            _ => {
                tracing::warn!("Pagamento {} fora da carteira do usuário {:?}", id, session.user_id);
                Err(AppError::NotFound("Pagamento"))
            }
        }
    }

    // Backends antigos não têm /pagamentos/agrupados: agrupa aqui mesmo
    async fn agrupados(&self, session: &Session) -> Result<Vec<PagamentoAgrupado>, AppError> {
        match self.pagamentos_repo.list_grouped(session).await {
            Err(AppError::Backend { status, .. }) if status == StatusCode::NOT_FOUND => {
                tracing::warn!("/pagamentos/agrupados ausente, agrupando localmente");
                let pagamentos = self.pagamentos_repo.list(session).await?;
                Ok(group_by_contrato(&pagamentos))
            }
            other => other,
        }
    }

    pub async fn contrato_detalhe(
        &self,
        session: &Session,
        id: i64,
    ) -> Result<ContratoDetalhe, AppError> {
        // Inquilino só enxerga os próprios contratos
        let meus = self.contratos_do_inquilino(session).await?;
        if !meus.contains(&id) {
            tracing::warn!("Contrato {} fora da carteira do usuário {:?}", id, session.user_id);
            return Err(AppError::NotFound("Contrato"));
        }

        let contrato = self.contratos_repo.find_by_id(session, id).await?;

        let imovel = contrato.imovel.clone().unwrap_or_default();
        let administrador = imovel.administrador.clone();

        Ok(ContratoDetalhe {
            id: contrato.id,
            status: contrato.status.badge(),
            imovel_nome: imovel.nome,
            imovel_tipo: imovel.tipo,
            imovel_codigo: imovel.codigo,
            imovel_endereco: imovel.endereco,
            administrador_nome: administrador.as_ref().map(|a| a.nome.clone()),
            administrador_email: administrador.as_ref().map(|a| a.email.clone()),
            data_inicio: format_optional_date(contrato.data_inicio),
            data_fim: format_optional_date(contrato.data_fim),
            vigencia: match (contrato.data_inicio, contrato.data_fim) {
                (Some(inicio), Some(fim)) => Some(format!(
                    "{} a {}",
                    format_date_long(inicio),
                    format_date_long(fim)
                )),
                _ => None,
            },
            valor_mensal: format_brl(contrato.valor_mensal),
            valor_deposito: format_brl(contrato.valor_deposito),
            taxa_administracao: contrato.taxa_administracao,
            dia_pagamento: contrato.dia_pagamento,
            observacoes: contrato.observacoes.clone(),
            parcelas: contrato.pagamentos.iter().map(parcela_row).collect(),
        })
    }

    pub async fn pagamento_detalhe(
        &self,
        session: &Session,
        id: i64,
    ) -> Result<PagamentoDetalhe, AppError> {
        let pagamento = self.pagamento_do_inquilino(session, id).await?;
        let imovel = pagamento.imovel_ref().cloned().unwrap_or_default();

        Ok(PagamentoDetalhe {
            id: pagamento.id,
            contrato_id: pagamento.contrato(),
            valor: format_brl(pagamento.valor),
            data_pagamento: format_optional_date(pagamento.data_pagamento),
            status: pagamento.status.badge(),
            imovel_nome: imovel.nome,
            imovel_endereco: imovel.endereco,
            pode_pagar: pode_pagar(pagamento.status),
            metodos_disponiveis: FormaPagamento::PORTAL.iter().map(|m| m.badge()).collect(),
        })
    }

    /// Paga uma parcela pelo portal e devolve para onde o inquilino vai depois.
    pub async fn pagar(
        &self,
        session: &Session,
        id: i64,
        form: PagarForm,
    ) -> Result<PagamentoRealizado, AppError> {
        let metodo = form.metodo()?;

        let pagamento = self.pagamento_do_inquilino(session, id).await?;
        if !pode_pagar(pagamento.status) {
            return Err(AppError::FormRejected("Este pagamento não está em aberto.".into()));
        }

        self.pagamentos_repo.pay(session, id, metodo).await?;
        tracing::info!("✅ Pagamento {} pago via {}", id, metodo.as_str());

        let redirect = match pagamento.contrato() {
            Some(contrato_id) => format!("/cliente/contratos/{contrato_id}"),
            None => "/cliente/home".to_string(),
        };

        Ok(PagamentoRealizado {
            pagamento_id: id,
            redirect,
        })
    }
}
