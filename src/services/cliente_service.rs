// src/services/cliente_service.rs

use crate::{
    backend::ClienteRepository,
    common::error::AppError,
    models::{
        auth::Session,
        cliente::{Cliente, ClienteRow, ClienteStatus},
        forms::{parse_status, ClienteForm},
        page::{ListPage, ListQuery},
        stats::ClienteStats,
        status::StatusDisplay,
    },
    services::{
        listing::{self, Searchable},
        stats::calculate_cliente_stats,
    },
};

pub type ClientesPage = ListPage<ClienteRow, ClienteStats>;

impl Searchable for Cliente {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.nome, &self.cpf, &self.telefone, &self.email]
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    fn status_value(&self) -> &str {
        self.status.as_str()
    }
}

#[derive(Clone)]
pub struct ClienteService {
    repo: ClienteRepository,
    page_size: usize,
}

impl ClienteService {
    pub fn new(repo: ClienteRepository, page_size: usize) -> Self {
        Self { repo, page_size }
    }

    pub async fn list_page(
        &self,
        session: &Session,
        query: &ListQuery,
    ) -> Result<ClientesPage, AppError> {
        match self.repo.list(session).await {
            Ok(clientes) => Ok(listing::build_page(
                &clientes,
                query,
                self.page_size,
                calculate_cliente_stats(&clientes),
                ClienteStatus::options(),
                |_| true,
            )),
            Err(e) => listing::fetch_failed(e, query, self.page_size, ClienteStatus::options()),
        }
    }

    pub async fn find(&self, session: &Session, id: i64) -> Result<Cliente, AppError> {
        self.repo.find_by_id(session, id).await
    }

    pub async fn create(&self, session: &Session, form: ClienteForm) -> Result<Cliente, AppError> {
        let request = form.into_request(true)?;
        let cliente = self.repo.create(session, &request).await?;
        tracing::info!("✅ Cliente {} cadastrado", cliente.id);
        Ok(cliente)
    }

    pub async fn update(
        &self,
        session: &Session,
        id: i64,
        form: ClienteForm,
    ) -> Result<Cliente, AppError> {
        let request = form.into_request(false)?;
        self.repo.update(session, id, &request).await
    }

    /// Troca o status e devolve a listagem recarregada.
    pub async fn change_status(
        &self,
        session: &Session,
        id: i64,
        status: &str,
        query: &ListQuery,
    ) -> Result<ClientesPage, AppError> {
        let status = parse_status::<ClienteStatus>(status)?;
        self.repo.update_status(session, id, status).await?;
        self.list_page(session, query).await
    }

    pub async fn delete(
        &self,
        session: &Session,
        id: i64,
        query: &ListQuery,
    ) -> Result<ClientesPage, AppError> {
        self.repo.delete(session, id).await?;
        tracing::info!("Cliente {} excluído", id);
        self.list_page(session, query).await
    }
}
