// src/backend/pagamentos_repo.rs

use reqwest::Method;

use crate::{
    backend::BackendClient,
    common::error::AppError,
    models::{
        auth::Session,
        pagamento::{
            FormaPagamento, FormaPagamentoRequest, PagamentoAgrupado, PagarRequest, Pagamento,
            PagamentoRequest, PagamentoStatus, StatusRequest,
        },
        status::StatusDisplay,
    },
};

#[derive(Clone)]
pub struct PagamentoRepository {
    client: BackendClient,
}

impl PagamentoRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, session: &Session) -> Result<Vec<Pagamento>, AppError> {
        self.client.get(session, "pagamentos").await
    }

    /// Resumo por contrato calculado pelo backend
    pub async fn list_grouped(&self, session: &Session) -> Result<Vec<PagamentoAgrupado>, AppError> {
        self.client.get(session, "pagamentos/agrupados").await
    }

    pub async fn find_by_id(&self, session: &Session, id: i64) -> Result<Pagamento, AppError> {
        self.client.get(session, &format!("pagamentos/{id}")).await
    }

    pub async fn create(
        &self,
        session: &Session,
        pagamento: &PagamentoRequest,
    ) -> Result<Pagamento, AppError> {
        self.client.post(session, "pagamentos", pagamento).await
    }

    pub async fn update_status(
        &self,
        session: &Session,
        id: i64,
        status: PagamentoStatus,
    ) -> Result<(), AppError> {
        let body = StatusRequest { status: status.as_str() };
        self.client
            .execute(session, Method::PATCH, &format!("pagamentos/{id}/status"), Some(&body))
            .await
    }

    pub async fn update_forma_pagamento(
        &self,
        session: &Session,
        id: i64,
        forma: Option<FormaPagamento>,
    ) -> Result<(), AppError> {
        let body = FormaPagamentoRequest { forma_pagamento: forma };
        self.client
            .execute(
                session,
                Method::PATCH,
                &format!("pagamentos/{id}/forma-pagamento"),
                Some(&body),
            )
            .await
    }

    pub async fn delete(&self, session: &Session, id: i64) -> Result<(), AppError> {
        self.client.delete(session, &format!("pagamentos/{id}")).await
    }

    /// POST /pagamentos/{id}/pagar: o processamento em si é do backend.
    pub async fn pay(&self, session: &Session, id: i64, metodo: FormaPagamento) -> Result<(), AppError> {
        let body = PagarRequest { metodo };
        self.client
            .execute(session, Method::POST, &format!("pagamentos/{id}/pagar"), Some(&body))
            .await
    }
}
