// src/services/contrato_service.rs

use rust_decimal::Decimal;

use crate::{
    backend::{ContratoRepository, ImovelRepository},
    common::error::AppError,
    models::{
        auth::Session,
        contrato::{Contrato, ContratoRow, ContratoStatus},
        forms::{parse_status, ContratoForm},
        page::{ListPage, ListQuery},
        stats::ContratoStats,
        status::StatusDisplay,
    },
    services::{
        listing::{self, Searchable},
        stats::calculate_contrato_stats,
    },
};

pub type ContratosPage = ListPage<ContratoRow, ContratoStats>;

pub const IMOVEL_INDISPONIVEL: &str = "O imóvel não está disponível no período selecionado.";

impl Searchable for Contrato {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(4);
        if let Some(c) = &self.cliente {
            fields.push(c.nome.as_str());
            fields.push(c.cpf.as_str());
        }
        if let Some(i) = &self.imovel {
            fields.push(i.nome.as_str());
            fields.push(i.codigo.as_str());
        }
        fields
    }

    fn status_value(&self) -> &str {
        self.status.as_str()
    }
}

#[derive(Clone)]
pub struct ContratoService {
    repo: ContratoRepository,
    imoveis_repo: ImovelRepository,
    page_size: usize,
}

impl ContratoService {
    pub fn new(repo: ContratoRepository, imoveis_repo: ImovelRepository, page_size: usize) -> Self {
        Self {
            repo,
            imoveis_repo,
            page_size,
        }
    }

    pub async fn list_page(
        &self,
        session: &Session,
        query: &ListQuery,
    ) -> Result<ContratosPage, AppError> {
        match self.repo.list(session).await {
            Ok(contratos) => Ok(listing::build_page(
                &contratos,
                query,
                self.page_size,
                calculate_contrato_stats(&contratos),
                ContratoStatus::options(),
                |_| true,
            )),
            Err(e) => listing::fetch_failed(e, query, self.page_size, ContratoStatus::options()),
        }
    }

    pub async fn find(&self, session: &Session, id: i64) -> Result<Contrato, AppError> {
        self.repo.find_by_id(session, id).await
    }

    /// Cadastro: valida o formulário (sem rede), confere a disponibilidade do
    /// imóvel no período e cria o contrato já ATIVO.
    pub async fn create(&self, session: &Session, form: ContratoForm) -> Result<Contrato, AppError> {
        form.check()?;

        let (Some(imovel_id), Some(inicio), Some(fim)) =
            (form.imovel_id, form.data_inicio, form.data_fim)
        else {
            return Err(AppError::FormRejected("Formulário de contrato incompleto.".into()));
        };

        let valor_padrao = self.valor_padrao(session, &form, imovel_id).await?;

        let disponivel = self
            .repo
            .check_availability(session, imovel_id, inicio, fim)
            .await?;
        if !disponivel {
            tracing::warn!("Imóvel {} indisponível de {} a {}", imovel_id, inicio, fim);
            return Err(AppError::FormRejected(IMOVEL_INDISPONIVEL.into()));
        }

        let request = form.into_request(ContratoStatus::Ativo, valor_padrao)?;
        let contrato = self.repo.create(session, &request).await?;
        tracing::info!("✅ Contrato {} criado para o imóvel {}", contrato.id, imovel_id);
        Ok(contrato)
    }

    pub async fn update(
        &self,
        session: &Session,
        id: i64,
        form: ContratoForm,
    ) -> Result<Contrato, AppError> {
        form.check()?;

        let Some(imovel_id) = form.imovel_id else {
            return Err(AppError::FormRejected("Formulário de contrato incompleto.".into()));
        };
        let valor_padrao = self.valor_padrao(session, &form, imovel_id).await?;

        let status = form.status;
        let request = form.into_request(status, valor_padrao)?;
        self.repo.update(session, id, &request).await
    }

    // Aluguel do imóvel, só buscado quando o formulário veio sem valor mensal
    async fn valor_padrao(
        &self,
        session: &Session,
        form: &ContratoForm,
        imovel_id: i64,
    ) -> Result<Decimal, AppError> {
        match form.valor_mensal {
            Some(valor) => Ok(valor),
            None => Ok(self.imoveis_repo.find_by_id(session, imovel_id).await?.valor_mensal),
        }
    }

    pub async fn change_status(
        &self,
        session: &Session,
        id: i64,
        status: &str,
        query: &ListQuery,
    ) -> Result<ContratosPage, AppError> {
        let status = parse_status::<ContratoStatus>(status)?;
        self.repo.update_status(session, id, status).await?;
        self.list_page(session, query).await
    }

    pub async fn delete(
        &self,
        session: &Session,
        id: i64,
        query: &ListQuery,
    ) -> Result<ContratosPage, AppError> {
        self.repo.delete(session, id).await?;
        tracing::info!("Contrato {} excluído", id);
        self.list_page(session, query).await
    }
}
