// src/handlers/portal.rs
// Portal do inquilino

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::rbac::ClienteSession,
    models::{
        dashboard::{ClienteDashboard, ContratoDetalhe, PagamentoDetalhe, PagamentoRealizado},
        forms::PagarForm,
        page::MutationResult,
    },
};

// GET /api/cliente/home
#[utoipa::path(
    get,
    path = "/api/cliente/home",
    tag = "Portal",
    responses(
        (status = 200, description = "Aluguéis ativos e pendências do inquilino", body = ClienteDashboard),
        (status = 401, description = "Sessão expirada"),
        (status = 403, description = "Somente inquilinos")
    ),
    security(("api_jwt" = []))
)]
pub async fn cliente_home(
    State(app_state): State<AppState>,
    cliente: ClienteSession,
) -> Result<Json<ClienteDashboard>, ApiError> {
    let home = app_state
        .dashboard_service
        .cliente_home(cliente.session())
        .await
        .map_err(|e| e.to_api_error("Erro ao carregar dados do dashboard"))?;

    Ok(Json(home))
}

// GET /api/cliente/contratos/{id}
#[utoipa::path(
    get,
    path = "/api/cliente/contratos/{id}",
    tag = "Portal",
    params(("id" = i64, Path, description = "ID do contrato")),
    responses(
        (status = 200, description = "Contrato com as parcelas", body = ContratoDetalhe),
        (status = 404, description = "Contrato não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_contrato(
    State(app_state): State<AppState>,
    cliente: ClienteSession,
    Path(id): Path<i64>,
) -> Result<Json<ContratoDetalhe>, ApiError> {
    let detalhe = app_state
        .dashboard_service
        .contrato_detalhe(cliente.session(), id)
        .await
        .map_err(|e| e.to_api_error("Erro ao carregar contrato"))?;

    Ok(Json(detalhe))
}

// GET /api/cliente/pagamentos/{id}
#[utoipa::path(
    get,
    path = "/api/cliente/pagamentos/{id}",
    tag = "Portal",
    params(("id" = i64, Path, description = "ID do pagamento")),
    responses(
        (status = 200, description = "Parcela e métodos de pagamento aceitos", body = PagamentoDetalhe),
        (status = 404, description = "Pagamento não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_pagamento(
    State(app_state): State<AppState>,
    cliente: ClienteSession,
    Path(id): Path<i64>,
) -> Result<Json<PagamentoDetalhe>, ApiError> {
    let detalhe = app_state
        .dashboard_service
        .pagamento_detalhe(cliente.session(), id)
        .await
        .map_err(|e| e.to_api_error("Erro ao carregar pagamento"))?;

    Ok(Json(detalhe))
}

// POST /api/cliente/pagamentos/{id}/pagar
#[utoipa::path(
    post,
    path = "/api/cliente/pagamentos/{id}/pagar",
    tag = "Portal",
    params(("id" = i64, Path, description = "ID do pagamento")),
    request_body = PagarForm,
    responses(
        (status = 200, description = "Pagamento realizado; `redirect` aponta para o contrato", body = MutationResult<PagamentoRealizado>),
        (status = 400, description = "Método não aceito pelo portal"),
        (status = 422, description = "Pagamento não está em aberto")
    ),
    security(("api_jwt" = []))
)]
pub async fn pagar(
    State(app_state): State<AppState>,
    cliente: ClienteSession,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): WithRejection<Json<PagarForm>, ApiError>,
) -> Result<Json<MutationResult<PagamentoRealizado>>, ApiError> {
    let realizado = app_state
        .dashboard_service
        .pagar(cliente.session(), id, payload)
        .await
        .map_err(|e| e.to_api_error("Erro ao processar pagamento. Tente novamente."))?;

    Ok(Json(MutationResult::new("Pagamento realizado com sucesso!", realizado)))
}
