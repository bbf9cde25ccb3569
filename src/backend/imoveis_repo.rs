// src/backend/imoveis_repo.rs

use crate::{
    backend::BackendClient,
    common::error::AppError,
    models::{
        auth::Session,
        imovel::{Imovel, ImovelRequest, ImovelStatus},
        status::StatusDisplay,
    },
};

#[derive(Clone)]
pub struct ImovelRepository {
    client: BackendClient,
}

impl ImovelRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, session: &Session) -> Result<Vec<Imovel>, AppError> {
        self.client.get(session, "imoveis").await
    }

    /// GET /imoveis/status/{status} (usado para montar o select do contrato)
    pub async fn list_by_status(
        &self,
        session: &Session,
        status: ImovelStatus,
    ) -> Result<Vec<Imovel>, AppError> {
        self.client
            .get(session, &format!("imoveis/status/{}", status.as_str()))
            .await
    }

    pub async fn find_by_id(&self, session: &Session, id: i64) -> Result<Imovel, AppError> {
        self.client.get(session, &format!("imoveis/{id}")).await
    }

    pub async fn create(&self, session: &Session, imovel: &ImovelRequest) -> Result<Imovel, AppError> {
        self.client.post(session, "imoveis", imovel).await
    }

    pub async fn update(
        &self,
        session: &Session,
        id: i64,
        imovel: &ImovelRequest,
    ) -> Result<Imovel, AppError> {
        self.client.put(session, &format!("imoveis/{id}"), imovel).await
    }

    // Aqui o backend espera o status na query string, não no corpo
    pub async fn update_status(
        &self,
        session: &Session,
        id: i64,
        status: ImovelStatus,
    ) -> Result<(), AppError> {
        self.client
            .patch_query(session, &format!("imoveis/{id}/status"), &[("status", status.as_str())])
            .await
    }

    pub async fn delete(&self, session: &Session, id: i64) -> Result<(), AppError> {
        self.client.delete(session, &format!("imoveis/{id}")).await
    }
}
