// src/backend/clientes_repo.rs

use reqwest::Method;

use crate::{
    backend::BackendClient,
    common::error::AppError,
    models::{
        auth::Session,
        cliente::{Cliente, ClienteRequest, ClienteStatus},
        pagamento::StatusRequest,
        status::StatusDisplay,
    },
};

#[derive(Clone)]
pub struct ClienteRepository {
    client: BackendClient,
}

impl ClienteRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// GET /clientes (a lista inteira, sem paginação no backend)
    pub async fn list(&self, session: &Session) -> Result<Vec<Cliente>, AppError> {
        self.client.get(session, "clientes").await
    }

    pub async fn find_by_id(&self, session: &Session, id: i64) -> Result<Cliente, AppError> {
        self.client.get(session, &format!("clientes/{id}")).await
    }

    pub async fn create(&self, session: &Session, cliente: &ClienteRequest) -> Result<Cliente, AppError> {
        self.client.post(session, "clientes", cliente).await
    }

    pub async fn update(
        &self,
        session: &Session,
        id: i64,
        cliente: &ClienteRequest,
    ) -> Result<Cliente, AppError> {
        self.client.put(session, &format!("clientes/{id}"), cliente).await
    }

    /// PATCH /clientes/{id}/status com `{ "status": ... }`
    pub async fn update_status(
        &self,
        session: &Session,
        id: i64,
        status: ClienteStatus,
    ) -> Result<(), AppError> {
        let body = StatusRequest { status: status.as_str() };
        self.client
            .execute(session, Method::PATCH, &format!("clientes/{id}/status"), Some(&body))
            .await
    }

    pub async fn delete(&self, session: &Session, id: i64) -> Result<(), AppError> {
        self.client.delete(session, &format!("clientes/{id}")).await
    }
}
