// src/backend/contratos_repo.rs

use chrono::NaiveDate;

use crate::{
    backend::BackendClient,
    common::error::AppError,
    models::{
        auth::Session,
        contrato::{Contrato, ContratoRequest, ContratoStatus, Disponibilidade},
        status::StatusDisplay,
    },
};

// No backend os contratos moram em /alugueis
#[derive(Clone)]
pub struct ContratoRepository {
    client: BackendClient,
}

impl ContratoRepository {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, session: &Session) -> Result<Vec<Contrato>, AppError> {
        let contratos: Vec<Contrato> = self.client.get(session, "alugueis").await?;
        Ok(contratos.into_iter().map(Contrato::normalize).collect())
    }

    pub async fn list_by_cliente(
        &self,
        session: &Session,
        cliente_id: i64,
    ) -> Result<Vec<Contrato>, AppError> {
        let contratos: Vec<Contrato> = self
            .client
            .get(session, &format!("alugueis/cliente/{cliente_id}"))
            .await?;
        Ok(contratos.into_iter().map(Contrato::normalize).collect())
    }

    pub async fn find_by_id(&self, session: &Session, id: i64) -> Result<Contrato, AppError> {
        let contrato: Contrato = self.client.get(session, &format!("alugueis/{id}")).await?;
        Ok(contrato.normalize())
    }

    pub async fn create(
        &self,
        session: &Session,
        contrato: &ContratoRequest,
    ) -> Result<Contrato, AppError> {
        let criado: Contrato = self.client.post(session, "alugueis", contrato).await?;
        Ok(criado.normalize())
    }

    /// PATCH /alugueis/{id} (atualização parcial no backend)
    pub async fn update(
        &self,
        session: &Session,
        id: i64,
        contrato: &ContratoRequest,
    ) -> Result<Contrato, AppError> {
        let atualizado: Contrato = self
            .client
            .patch(session, &format!("alugueis/{id}"), contrato)
            .await?;
        Ok(atualizado.normalize())
    }

    pub async fn update_status(
        &self,
        session: &Session,
        id: i64,
        status: ContratoStatus,
    ) -> Result<(), AppError> {
        self.client
            .patch_query(session, &format!("alugueis/{id}/status"), &[("status", status.as_str())])
            .await
    }

    pub async fn delete(&self, session: &Session, id: i64) -> Result<(), AppError> {
        self.client.delete(session, &format!("alugueis/{id}")).await
    }

    /// Pergunta ao backend se o imóvel está livre no período.
    pub async fn check_availability(
        &self,
        session: &Session,
        imovel_id: i64,
        data_inicio: NaiveDate,
        data_fim: NaiveDate,
    ) -> Result<bool, AppError> {
        let query = [
            ("imovelId", imovel_id.to_string()),
            ("dataInicio", data_inicio.to_string()),
            ("dataFim", data_fim.to_string()),
        ];
        let resposta: Disponibilidade = self
            .client
            .get_with_query(session, "alugueis/verificar-disponibilidade", &query)
            .await?;
        Ok(resposta.disponivel)
    }
}
