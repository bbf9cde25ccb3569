// src/services/pagamento_service.rs

use crate::{
    backend::PagamentoRepository,
    common::error::{AppError, FETCH_ERROR_MESSAGE},
    models::{
        auth::Session,
        dashboard::PagamentosDoContrato,
        forms::{parse_status, PagamentoForm},
        page::{ListPage, ListQuery},
        pagamento::{FormaPagamento, Pagamento, PagamentoRow, PagamentoStatus},
        stats::PagamentoStats,
        status::StatusDisplay,
    },
    services::{
        listing::{self, active_filter, Searchable},
        stats::calculate_pagamento_stats,
    },
};

pub type PagamentosPage = ListPage<PagamentoRow, PagamentoStats>;

impl Searchable for Pagamento {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(5);
        if let Some(c) = &self.cliente {
            fields.push(c.nome.as_str());
            fields.push(c.cpf.as_str());
        }
        if let Some(i) = self.imovel_ref() {
            fields.push(i.nome.as_str());
            fields.push(i.codigo.as_str());
        }
        if let Some(forma) = self.forma_pagamento {
            fields.push(forma.as_str());
        }
        fields
    }

    fn status_value(&self) -> &str {
        self.status.as_str()
    }
}

// Filtro extra da página de pagamentos
fn matches_forma(pagamento: &Pagamento, forma: Option<&str>) -> bool {
    match active_filter(forma) {
        Some(wanted) => pagamento
            .forma_pagamento
            .is_some_and(|f| f.as_str().eq_ignore_ascii_case(wanted)),
        None => true,
    }
}

#[derive(Clone)]
pub struct PagamentoService {
    repo: PagamentoRepository,
    page_size: usize,
}

impl PagamentoService {
    pub fn new(repo: PagamentoRepository, page_size: usize) -> Self {
        Self { repo, page_size }
    }

    pub async fn list_page(
        &self,
        session: &Session,
        query: &ListQuery,
    ) -> Result<PagamentosPage, AppError> {
        let forma = query.forma_pagamento.as_deref();
        match self.repo.list(session).await {
            Ok(pagamentos) => Ok(listing::build_page(
                &pagamentos,
                query,
                self.page_size,
                calculate_pagamento_stats(&pagamentos),
                PagamentoStatus::options(),
                |p| matches_forma(p, forma),
            )),
            Err(e) => listing::fetch_failed(e, query, self.page_size, PagamentoStatus::options()),
        }
    }

    pub async fn create(&self, session: &Session, form: PagamentoForm) -> Result<Pagamento, AppError> {
        let request = form.into_request()?;
        let pagamento = self.repo.create(session, &request).await?;
        tracing::info!("✅ Pagamento {} registrado", pagamento.id);
        Ok(pagamento)
    }

    pub async fn change_status(
        &self,
        session: &Session,
        id: i64,
        status: &str,
        query: &ListQuery,
    ) -> Result<PagamentosPage, AppError> {
        let status = parse_status::<PagamentoStatus>(status)?;
        self.repo.update_status(session, id, status).await?;
        self.list_page(session, query).await
    }

    pub async fn change_forma_pagamento(
        &self,
        session: &Session,
        id: i64,
        forma: Option<FormaPagamento>,
        query: &ListQuery,
    ) -> Result<PagamentosPage, AppError> {
        self.repo.update_forma_pagamento(session, id, forma).await?;
        self.list_page(session, query).await
    }

    pub async fn delete(
        &self,
        session: &Session,
        id: i64,
        query: &ListQuery,
    ) -> Result<PagamentosPage, AppError> {
        self.repo.delete(session, id).await?;
        tracing::info!("Pagamento {} excluído", id);
        self.list_page(session, query).await
    }

    /// Pagamentos de um contrato, com os nomes tirados do primeiro pagamento.
    pub async fn by_contrato(
        &self,
        session: &Session,
        contrato_id: i64,
    ) -> Result<PagamentosDoContrato, AppError> {
        let pagamentos = match self.repo.list(session).await {
            Ok(todos) => todos
                .into_iter()
                .filter(|p| p.contrato() == Some(contrato_id))
                .collect::<Vec<_>>(),
            Err(e) if e.is_auth_failure() => return Err(e),
            Err(e) => {
                tracing::error!("🔥 Falha ao carregar pagamentos do contrato {}: {}", contrato_id, e);
                return Ok(PagamentosDoContrato {
                    contrato_id,
                    imovel_nome: None,
                    imovel_codigo: None,
                    cliente_nome: None,
                    pagamentos: Vec::new(),
                    stats: PagamentoStats::default(),
                    error: Some(FETCH_ERROR_MESSAGE.to_string()),
                });
            }
        };

        let primeiro = pagamentos.first();
        let imovel = primeiro.and_then(|p| p.imovel_ref());
        let cliente = primeiro.and_then(|p| p.cliente.as_ref());

        Ok(PagamentosDoContrato {
            contrato_id,
            imovel_nome: imovel.map(|i| i.nome.clone()),
            imovel_codigo: imovel.map(|i| i.codigo.clone()),
            cliente_nome: cliente.map(|c| c.nome.clone()),
            stats: calculate_pagamento_stats(&pagamentos),
            pagamentos: pagamentos.iter().map(PagamentoRow::from).collect(),
            error: None,
        })
    }
}
